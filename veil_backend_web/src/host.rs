// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host and canvas surface.
//!
//! [`WebHost`] measures the page through `document.documentElement` and
//! attaches overlays to `document.body`. [`CanvasSurface`] pairs a `<canvas>`
//! element with the `CanvasRenderingContext2d` obtained from it.

use kurbo::{Rect, Size};
use veil_core::extent::DocumentMetrics;
use veil_core::scale::BackingSize;
use veil_core::surface::{Host, OverlayStyle, Surface};
use wasm_bindgen::JsCast as _;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::css_px;

/// The browser page an overlay is drawn over.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Creates a host for the global `window`.
    ///
    /// # Panics
    ///
    /// Panics if there is no global `window` or it has no `document`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_window(web_sys::window().expect("no global window"))
    }

    /// Creates a host for the given `window`.
    ///
    /// # Panics
    ///
    /// Panics if `window` has no `document`.
    #[must_use]
    pub fn from_window(window: Window) -> Self {
        let document = window.document().expect("no document");
        Self { window, document }
    }

    /// Returns the window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn document_metrics(&self) -> DocumentMetrics {
        let Some(root) = self.document.document_element() else {
            return DocumentMetrics::default();
        };
        let scroll = Size::new(
            f64::from(root.scroll_width()),
            f64::from(root.scroll_height()),
        );
        // `offsetWidth`/`offsetHeight` live on HTMLElement; an SVG root has
        // no offset box.
        let offset = root
            .dyn_ref::<HtmlElement>()
            .map(|root| {
                Size::new(
                    f64::from(root.offset_width()),
                    f64::from(root.offset_height()),
                )
            })
            .unwrap_or(Size::ZERO);
        DocumentMetrics { scroll, offset }
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn create_surface(&self, id: &str) -> CanvasSurface {
        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .expect("create_element failed")
            .unchecked_into();
        canvas.set_id(id);
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("getContext failed")
            .expect("2d context unavailable")
            .unchecked_into();
        CanvasSurface { canvas, context }
    }

    fn attach(&self, surface: &CanvasSurface) {
        let body = self.document.body().expect("no body");
        let _ = body.append_child(&surface.canvas);
    }
}

/// An overlay `<canvas>` and the 2-D context it owns.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Returns the canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Context = CanvasRenderingContext2d;

    fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    fn set_display_size(&mut self, size: Size) {
        let s = self.canvas.style();
        let _ = s.set_property("width", &css_px(size.width));
        let _ = s.set_property("height", &css_px(size.height));
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        // Assigning either dimension resets the context state, transform
        // included.
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn scale_context(&mut self, sx: f64, sy: f64) {
        let _ = self.context.scale(sx, sy);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.context
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn apply_style(&mut self, style: &OverlayStyle) {
        let s = self.canvas.style();
        for (property, value) in style.declarations() {
            let _ = s.set_property(property, &value);
        }
    }

    fn detach(&mut self) {
        self.canvas.remove();
    }
}
