// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in order,
//! as a [`RecordedEvent`].

use veil_core::trace::{
    ClearEvent, RescaleEvent, SurfaceCreatedEvent, SurfaceDestroyedEvent, TraceSink,
};

/// One recorded lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_surface_created`].
    SurfaceCreated(SurfaceCreatedEvent),
    /// See [`TraceSink::on_rescale`].
    Rescale(RescaleEvent),
    /// See [`TraceSink::on_clear`].
    Clear(ClearEvent),
    /// See [`TraceSink::on_surface_destroyed`].
    SurfaceDestroyed(SurfaceDestroyedEvent),
}

impl RecordedEvent {
    /// Returns a stable snake-case name for the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SurfaceCreated(_) => "surface_created",
            Self::Rescale(_) => "rescale",
            Self::Clear(_) => "clear",
            Self::SurfaceDestroyed(_) => "surface_destroyed",
        }
    }
}

/// A [`TraceSink`] that records events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_surface_created(&mut self, e: &SurfaceCreatedEvent) {
        self.events.push(RecordedEvent::SurfaceCreated(*e));
    }

    fn on_rescale(&mut self, e: &RescaleEvent) {
        self.events.push(RecordedEvent::Rescale(*e));
    }

    fn on_clear(&mut self, e: &ClearEvent) {
        self.events.push(RecordedEvent::Clear(*e));
    }

    fn on_surface_destroyed(&mut self, e: &SurfaceDestroyedEvent) {
        self.events.push(RecordedEvent::SurfaceDestroyed(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use veil_core::scale::BackingSize;
    use veil_core::surface::SurfaceGeneration;

    #[test]
    fn records_in_order() {
        let mut rec = RecorderSink::new();
        let created = SurfaceCreatedEvent {
            generation: SurfaceGeneration(1),
            extent: Size::new(800.0, 600.0),
            backing: BackingSize::new(1600, 1200),
            device_pixel_ratio: 2.0,
        };
        let destroyed = SurfaceDestroyedEvent {
            generation: SurfaceGeneration(1),
            extent: Size::new(800.0, 600.0),
        };
        rec.on_surface_created(&created);
        rec.on_surface_destroyed(&destroyed);

        assert_eq!(
            rec.events(),
            [
                RecordedEvent::SurfaceCreated(created),
                RecordedEvent::SurfaceDestroyed(destroyed),
            ]
        );
        assert_eq!(rec.events()[0].name(), "surface_created");
    }

    #[test]
    fn clear_discards_events() {
        let mut rec = RecorderSink::new();
        rec.on_clear(&ClearEvent {
            generation: SurfaceGeneration(3),
            extent: Size::new(1.0, 1.0),
        });
        rec.clear();
        assert!(rec.into_events().is_empty());
    }
}
