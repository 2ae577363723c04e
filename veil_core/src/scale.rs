// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-pixel scaling.
//!
//! A surface has two sizes: its logical (CSS) display size, which is what
//! layout sees, and its backing-store size in physical pixels. On a display
//! with device pixel ratio `r`, a `w`×`h` logical surface needs a
//! `floor(w·r)`×`floor(h·r)` backing store to render sharply, and its
//! context must be scaled by `(r, r)` so callers keep drawing in logical
//! pixels.
//!
//! Resizing the backing store resets the context transform. [`normalize`]
//! therefore always reapplies the scale after resizing; calling it is the only
//! supported way to change a surface's size.

use core::fmt;

use kurbo::Size;

use crate::surface::{Host, Surface};

/// Backing-store dimensions in physical pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BackingSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl BackingSize {
    /// The empty backing store.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a backing size.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Computes the backing store for a logical `extent` at `ratio`.
    ///
    /// Each axis is `floor(logical × ratio)`. Negative and NaN products
    /// saturate to `0`.
    #[must_use]
    pub fn for_extent(extent: Size, ratio: f64) -> Self {
        Self {
            width: physical(extent.width, ratio),
            height: physical(extent.height, ratio),
        }
    }
}

impl fmt::Debug for BackingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BackingSize({}×{})", self.width, self.height)
    }
}

/// `floor(logical × ratio)`, clamped to `u32`.
fn physical(logical: f64, ratio: f64) -> u32 {
    // Truncation toward zero is floor for non-negative values; negative
    // and NaN products saturate to 0.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "float-to-int `as` saturates; page extents are far below u32::MAX"
    )]
    let px = (logical * ratio) as u32;
    px
}

/// Sizes `surface` to the logical `extent` on `host`'s display.
///
/// 1. Sets the display size to `extent`.
/// 2. Reads the device pixel ratio.
/// 3. Sets the backing store to [`BackingSize::for_extent`].
/// 4. Scales the context by `(ratio, ratio)`.
///
/// Step 4 runs on every call because step 3 discards the previous transform.
/// Returns the backing size that was set.
pub fn normalize<H: Host + ?Sized>(host: &H, surface: &mut H::Surface, extent: Size) -> BackingSize {
    surface.set_display_size(extent);

    let ratio = host.device_pixel_ratio();
    let backing = BackingSize::for_extent(extent, ratio);
    surface.set_backing_size(backing);

    surface.scale_context(ratio, ratio);
    backing
}
