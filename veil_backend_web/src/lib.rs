// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for veil.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`WebHost`]: the page (`documentElement` extents, `devicePixelRatio`,
//!   `document.body` as the overlay's parent)
//! - [`CanvasSurface`]: an `HTMLCanvasElement` and its 2-D context
//! - [`MeasureOverlay`]: a `wasm-bindgen` class that exposes the overlay
//!   lifecycle to JavaScript
//!
//! From Rust, drive the overlay directly:
//!
//! ```rust,ignore
//! let mut overlay = Overlay::new(WebHost::new());
//! overlay.init();
//! overlay.draw(|ctx| {
//!     if let Some(ctx) = ctx {
//!         ctx.stroke_rect(10.0, 10.0, 120.0, 40.0);
//!     }
//! });
//! ```

#![no_std]

extern crate alloc;

mod bindings;
mod host;

pub use bindings::MeasureOverlay;
pub use host::{CanvasSurface, WebHost};
pub use veil_core::overlay::{Overlay, OverlayConfig};
pub use veil_core::surface::{Host, Surface};

use alloc::format;
use alloc::string::String;

/// Formats a logical length as a CSS pixel value.
#[must_use]
pub(crate) fn css_px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_px_formats_integral_and_fractional_lengths() {
        assert_eq!(css_px(800.0), "800px");
        assert_eq!(css_px(0.0), "0px");
        assert_eq!(css_px(12.5), "12.5px");
    }
}
