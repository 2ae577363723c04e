// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Size;
use veil_core::scale::BackingSize;
use veil_core::trace::{
    ClearEvent, RescaleEvent, SurfaceCreatedEvent, SurfaceDestroyedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

struct Logical(Size);

impl std::fmt::Display for Logical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.0.width, self.0.height)
    }
}

struct Physical(BackingSize);

impl std::fmt::Display for Physical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}px", self.0.width, self.0.height)
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_surface_created(&mut self, e: &SurfaceCreatedEvent) {
        let _ = writeln!(
            self.writer,
            "[create] gen={} extent={} backing={} dpr={}",
            e.generation.0,
            Logical(e.extent),
            Physical(e.backing),
            e.device_pixel_ratio,
        );
    }

    fn on_rescale(&mut self, e: &RescaleEvent) {
        let _ = writeln!(
            self.writer,
            "[rescale] gen={} {} -> {} backing={} dpr={}",
            e.generation.0,
            Logical(e.previous),
            Logical(e.extent),
            Physical(e.backing),
            e.device_pixel_ratio,
        );
    }

    fn on_clear(&mut self, e: &ClearEvent) {
        let _ = writeln!(
            self.writer,
            "[clear] gen={} extent={}",
            e.generation.0,
            Logical(e.extent),
        );
    }

    fn on_surface_destroyed(&mut self, e: &SurfaceDestroyedEvent) {
        let _ = writeln!(
            self.writer,
            "[destroy] gen={} extent={}",
            e.generation.0,
            Logical(e.extent),
        );
    }
}
