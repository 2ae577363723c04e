// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle diagnostics.
//!
//! An [`Overlay`](crate::overlay::Overlay) reports what it does to a
//! [`TraceSink`]. All sink methods default to no-ops, so implementing only the
//! events you care about is fine. The default sink is [`NoopSink`].
//!
//! Events are only emitted when the `trace` feature is enabled; without it the
//! overlay never calls its sink and the emission sites compile to nothing.

use kurbo::Size;

use crate::scale::BackingSize;
use crate::surface::SurfaceGeneration;

/// Emitted after a new surface has been created, sized, and attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceCreatedEvent {
    /// Generation stamped on the new surface.
    pub generation: SurfaceGeneration,
    /// Measured logical page extent.
    pub extent: Size,
    /// Backing-store size set for that extent.
    pub backing: BackingSize,
    /// Device pixel ratio read while sizing.
    pub device_pixel_ratio: f64,
}

/// Emitted after the surface has been resized to a re-measured extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RescaleEvent {
    /// Generation of the rescaled surface.
    pub generation: SurfaceGeneration,
    /// Extent before the rescale.
    pub previous: Size,
    /// Freshly measured extent.
    pub extent: Size,
    /// Backing-store size set for `extent`.
    pub backing: BackingSize,
    /// Device pixel ratio read while sizing.
    pub device_pixel_ratio: f64,
}

/// Emitted when an existing surface is erased.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearEvent {
    /// Generation of the cleared surface.
    pub generation: SurfaceGeneration,
    /// Logical region that was erased, anchored at the origin.
    pub extent: Size,
}

/// Emitted after a surface has been detached and the state reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceDestroyedEvent {
    /// Generation of the destroyed surface.
    pub generation: SurfaceGeneration,
    /// Extent the surface had when it was destroyed.
    pub extent: Size,
}

/// Receives overlay lifecycle events.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called by [`init`](crate::overlay::Overlay::init) when it creates a
    /// surface.
    fn on_surface_created(&mut self, e: &SurfaceCreatedEvent) {
        _ = e;
    }

    /// Called at the end of [`rescale`](crate::overlay::Overlay::rescale).
    fn on_rescale(&mut self, e: &RescaleEvent) {
        _ = e;
    }

    /// Called by [`clear`](crate::overlay::Overlay::clear) (and therefore
    /// by `draw` and `destroy`) when a surface exists.
    fn on_clear(&mut self, e: &ClearEvent) {
        _ = e;
    }

    /// Called by [`destroy`](crate::overlay::Overlay::destroy) after the
    /// surface has been detached.
    fn on_surface_destroyed(&mut self, e: &SurfaceDestroyedEvent) {
        _ = e;
    }
}

/// A sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn on_surface_created(&mut self, e: &SurfaceCreatedEvent) {
        (**self).on_surface_created(e);
    }

    fn on_rescale(&mut self, e: &RescaleEvent) {
        (**self).on_rescale(e);
    }

    fn on_clear(&mut self, e: &ClearEvent) {
        (**self).on_clear(e);
    }

    fn on_surface_destroyed(&mut self, e: &SurfaceDestroyedEvent) {
        (**self).on_surface_destroyed(e);
    }
}
