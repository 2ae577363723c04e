// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract and surface creation.
//!
//! Veil splits platform-specific work into *backend* crates. Each backend
//! provides two pieces:
//!
//! - **[`Host`]** — The page the overlay lives on: its extent metrics, the
//!   display's device pixel ratio, and the ability to create and attach
//!   surface nodes.
//!
//! - **[`Surface`]** — One drawing surface node together with the 2-D drawing
//!   context it owns. A surface and its context are created together and
//!   dropped together, so "context present iff surface present" holds by
//!   construction.
//!
//! [`create`] is the factory that turns a host into a populated
//! [`ActiveSurface`]: created, sized, styled, and attached.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::{Rect, Size};

use crate::extent::{self, DocumentMetrics};
use crate::overlay::OverlayConfig;
use crate::scale::{self, BackingSize};

/// The page an overlay is drawn over.
///
/// All methods are synchronous, bounded DOM-style operations that are
/// assumed to succeed.
pub trait Host {
    /// The surface type this host creates.
    type Surface: Surface;

    /// Reads the root content element's scroll and offset extents.
    fn document_metrics(&self) -> DocumentMetrics;

    /// Returns physical pixels per logical pixel for the current display.
    fn device_pixel_ratio(&self) -> f64;

    /// Creates a detached surface node with the given identifier and obtains
    /// its 2-D drawing context.
    fn create_surface(&self, id: &str) -> Self::Surface;

    /// Appends `surface` as the last child of the page's root content
    /// container.
    fn attach(&self, surface: &Self::Surface);
}

/// A drawing surface node and the drawing context it owns.
pub trait Surface {
    /// The stateful object drawing commands are issued through.
    type Context;

    /// Borrows the drawing context.
    fn context(&self) -> &Self::Context;

    /// Sets the logical (CSS) display size.
    fn set_display_size(&mut self, size: Size);

    /// Sets the backing-store pixel dimensions.
    ///
    /// On every known platform this also resets the context's coordinate
    /// transform to identity, even when the dimensions are unchanged.
    fn set_backing_size(&mut self, size: BackingSize);

    /// Post-multiplies the context's coordinate transform by a scale.
    fn scale_context(&mut self, sx: f64, sy: f64);

    /// Erases `rect`, given in the context's current coordinate space.
    fn clear_rect(&mut self, rect: Rect);

    /// Applies the overlay's presentation style to the node.
    fn apply_style(&mut self, style: &OverlayStyle);

    /// Detaches the node from its parent. No-op if it has none.
    fn detach(&mut self);
}

/// Counts surface creations over the lifetime of an overlay.
///
/// Each [`create`] call stamps a new generation, so a surface created after a
/// teardown is distinguishable from the one it replaces.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceGeneration(pub u32);

impl SurfaceGeneration {
    /// Returns the generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for SurfaceGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceGeneration({})", self.0)
    }
}

/// Presentation style of the overlay node.
///
/// Absolutely positioned at the page origin, stacked above all page content,
/// and transparent to pointer input so every click and hover reaches the page
/// underneath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayStyle {
    /// CSS `z-index`.
    pub z_index: i32,
}

impl OverlayStyle {
    /// Returns the style as CSS `(property, value)` declarations.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 5] {
        [
            ("position", String::from("absolute")),
            ("top", String::from("0")),
            ("left", String::from("0")),
            ("z-index", format!("{}", self.z_index)),
            ("pointer-events", String::from("none")),
        ]
    }
}

impl From<&OverlayConfig> for OverlayStyle {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            z_index: config.z_index,
        }
    }
}

/// A created, attached surface and the extent it was last sized to.
#[derive(Debug)]
pub struct ActiveSurface<S> {
    /// The surface node (which owns its context).
    pub surface: S,
    /// Logical page extent at creation or the most recent rescale.
    pub extent: Size,
    /// Backing-store size matching `extent` at the time it was measured.
    pub backing: BackingSize,
    /// Which creation this surface came from.
    pub generation: SurfaceGeneration,
}

/// Creates a new overlay surface on `host`.
///
/// The node is created and given `config.element_id`, sized to the freshly
/// measured page extent, styled, and only then appended to the page. Sizing
/// happens before attachment so the new node cannot inflate its own
/// measurement.
pub fn create<H: Host + ?Sized>(
    host: &H,
    config: &OverlayConfig,
    generation: SurfaceGeneration,
) -> ActiveSurface<H::Surface> {
    let mut surface = host.create_surface(&config.element_id);

    let extent = extent::measure(host);
    let backing = scale::normalize(host, &mut surface, extent);

    surface.apply_style(&OverlayStyle::from(config));
    host.attach(&surface);

    ActiveSurface {
        surface,
        extent,
        backing,
        generation,
    }
}
