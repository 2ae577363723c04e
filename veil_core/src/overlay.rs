// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay lifecycle manager.
//!
//! [`Overlay`] owns the single overlay state of a page and exposes the five
//! lifecycle operations:
//!
//! ```text
//!   empty ──init()──► initialized ──destroy()──► empty
//!                      │  ▲
//!                      └──┘ clear() / draw() / rescale()
//! ```
//!
//! The hosting application creates one `Overlay` and keeps it for the page
//! session. `clear`, `draw`, and `destroy` are no-ops while empty; `rescale`
//! while empty is a caller bug and panics.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::extent;
use crate::scale::{self, BackingSize};
use crate::surface::{self, ActiveSurface, Host, Surface, SurfaceGeneration};
use crate::trace::{
    ClearEvent, NoopSink, RescaleEvent, SurfaceCreatedEvent, SurfaceDestroyedEvent, TraceSink,
};

/// Configuration for an [`Overlay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Identifier assigned to the surface node.
    pub element_id: String,
    /// Stacking order of the surface node.
    pub z_index: i32,
}

impl OverlayConfig {
    /// Identifier used by [`Default`].
    pub const DEFAULT_ELEMENT_ID: &'static str = "measure-overlay";
}

impl Default for OverlayConfig {
    /// [`DEFAULT_ELEMENT_ID`](Self::DEFAULT_ELEMENT_ID) at the maximum CSS
    /// stacking order (`2147483647`).
    fn default() -> Self {
        Self {
            element_id: String::from(Self::DEFAULT_ELEMENT_ID),
            z_index: i32::MAX,
        }
    }
}

/// Drawing context type of a host's surfaces.
pub type ContextOf<H> = <<H as Host>::Surface as Surface>::Context;

/// Manages the single full-page overlay surface on a [`Host`].
///
/// State is either *empty* (no surface) or *initialized* (one attached
/// surface that owns its drawing context). Dropping an `Overlay` destroys its
/// surface.
pub struct Overlay<H: Host, T: TraceSink = NoopSink> {
    host: H,
    config: OverlayConfig,
    active: Option<ActiveSurface<H::Surface>>,
    generation: SurfaceGeneration,
    sink: T,
}

impl<H: Host, T: TraceSink> fmt::Debug for Overlay<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("config", &self.config)
            .field("initialized", &self.active.is_some())
            .field("extent", &self.extent())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<H: Host> Overlay<H> {
    /// Creates an empty overlay on `host` with the default configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, OverlayConfig::default())
    }

    /// Creates an empty overlay on `host`.
    #[must_use]
    pub fn with_config(host: H, config: OverlayConfig) -> Self {
        Self::with_trace_sink(host, config, NoopSink)
    }
}

impl<H: Host, T: TraceSink> Overlay<H, T> {
    /// Creates an empty overlay that reports lifecycle events to `sink`.
    ///
    /// Events are only delivered with the `trace` feature enabled.
    #[must_use]
    pub fn with_trace_sink(host: H, config: OverlayConfig, sink: T) -> Self {
        Self {
            host,
            config,
            active: None,
            generation: SurfaceGeneration::default(),
            sink,
        }
    }

    /// Creates and attaches the surface.
    ///
    /// A no-op if the overlay is already initialized, so repeated calls never
    /// produce a second node.
    pub fn init(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.generation = self.generation.next();
        let active = surface::create(&self.host, &self.config, self.generation);

        self.trace(|sink, ratio| {
            sink.on_surface_created(&SurfaceCreatedEvent {
                generation: active.generation,
                extent: active.extent,
                backing: active.backing,
                device_pixel_ratio: ratio,
            });
        });
        self.active = Some(active);
    }

    /// Erases the region `(0, 0)`–`(width, height)` of the surface.
    ///
    /// A no-op if the overlay is empty.
    pub fn clear(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active
            .surface
            .clear_rect(Rect::from_origin_size(Point::ORIGIN, active.extent));

        let e = ClearEvent {
            generation: active.generation,
            extent: active.extent,
        };
        self.trace(|sink, _| sink.on_clear(&e));
    }

    /// Clears the surface, then runs `paint` with its drawing context.
    ///
    /// `paint` receives `None` if the overlay is empty. It runs to completion
    /// before `draw` returns and cannot keep the context beyond the call.
    pub fn draw<R>(&mut self, paint: impl FnOnce(Option<&ContextOf<H>>) -> R) -> R {
        self.clear();
        paint(self.active.as_ref().map(|active| active.surface.context()))
    }

    /// Resizes the surface to the page's current full extent.
    ///
    /// The surface is first shrunk to 0×0 so that its old size cannot
    /// contribute to the page's scroll extent, then the page is re-measured
    /// and the surface resized to the result.
    ///
    /// # Panics
    ///
    /// Panics if the overlay is empty: calling `rescale` before
    /// [`init`](Self::init) is a caller ordering bug.
    pub fn rescale(&mut self) {
        let Some(active) = self.active.as_mut() else {
            panic!("Overlay::rescale called before init: no surface exists");
        };

        scale::normalize(&self.host, &mut active.surface, Size::ZERO);

        let extent = extent::measure(&self.host);
        let backing = scale::normalize(&self.host, &mut active.surface, extent);

        let previous = active.extent;
        active.extent = extent;
        active.backing = backing;

        let generation = active.generation;
        self.trace(|sink, ratio| {
            sink.on_rescale(&RescaleEvent {
                generation,
                previous,
                extent,
                backing,
                device_pixel_ratio: ratio,
            });
        });
    }

    /// Clears and detaches the surface, returning to the empty state.
    ///
    /// A no-op if the overlay is already empty. A later [`init`](Self::init)
    /// creates a fresh node.
    pub fn destroy(&mut self) {
        self.clear();
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.surface.detach();

        let e = SurfaceDestroyedEvent {
            generation: active.generation,
            extent: active.extent,
        };
        self.trace(|sink, _| sink.on_surface_destroyed(&e));
    }

    /// Returns `true` if a surface exists.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the logical extent the surface was last sized to, if any.
    #[must_use]
    pub fn extent(&self) -> Option<Size> {
        self.active.as_ref().map(|active| active.extent)
    }

    /// Returns the current backing-store size, if any.
    #[must_use]
    pub fn backing(&self) -> Option<BackingSize> {
        self.active.as_ref().map(|active| active.backing)
    }

    /// Returns the generation of the most recently created surface.
    ///
    /// `SurfaceGeneration(0)` means no surface has been created yet.
    #[must_use]
    pub fn generation(&self) -> SurfaceGeneration {
        self.generation
    }

    /// Returns the surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&H::Surface> {
        self.active.as_ref().map(|active| &active.surface)
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Returns the trace sink.
    #[must_use]
    pub fn trace_sink(&self) -> &T {
        &self.sink
    }

    /// Returns the trace sink mutably.
    pub fn trace_sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }

    /// Hands the sink and the current device pixel ratio to `emit`.
    #[inline]
    fn trace(&mut self, emit: impl FnOnce(&mut T, f64)) {
        #[cfg(feature = "trace")]
        {
            let ratio = self.host.device_pixel_ratio();
            emit(&mut self.sink, ratio);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = emit;
        }
    }
}

impl<H: Host, T: TraceSink> Drop for Overlay<H, T> {
    fn drop(&mut self) {
        self.destroy();
    }
}
