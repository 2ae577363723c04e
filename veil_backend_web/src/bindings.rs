// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript bindings.
//!
//! ```js
//! const overlay = new MeasureOverlay();
//! overlay.init();
//! overlay.draw((ctx) => ctx?.strokeRect(10, 10, 120, 40));
//! window.addEventListener("resize", () => overlay.rescale());
//! overlay.destroy();
//! ```

use alloc::string::String;

use veil_core::overlay::{Overlay, OverlayConfig};
use wasm_bindgen::prelude::*;

use crate::host::WebHost;

/// The page's measurement overlay, as seen from JavaScript.
///
/// Create one per page and keep it for the session.
#[wasm_bindgen]
#[derive(Debug)]
pub struct MeasureOverlay {
    inner: Overlay<WebHost>,
}

#[wasm_bindgen]
impl MeasureOverlay {
    /// Creates an empty overlay for the global window.
    ///
    /// `element_id` and `z_index` override the canvas id and stacking order.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(element_id: Option<String>, z_index: Option<i32>) -> Self {
        let mut config = OverlayConfig::default();
        if let Some(id) = element_id {
            config.element_id = id;
        }
        if let Some(z) = z_index {
            config.z_index = z;
        }
        Self {
            inner: Overlay::with_config(WebHost::new(), config),
        }
    }

    /// Creates and attaches the canvas if it does not exist yet.
    pub fn init(&mut self) {
        self.inner.init();
    }

    /// Erases the canvas. No-op before `init`.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Clears the canvas and calls `callback` with its 2-D context, or with
    /// `undefined` before `init`.
    ///
    /// An exception thrown by `callback` is rethrown once the overlay has
    /// finished the call.
    pub fn draw(&mut self, callback: &js_sys::Function) -> Result<(), JsValue> {
        self.inner.draw(|ctx| {
            let arg = ctx.map_or(JsValue::UNDEFINED, |ctx| JsValue::from(ctx.clone()));
            callback.call1(&JsValue::NULL, &arg).map(drop)
        })
    }

    /// Resizes the canvas to the page's current full extent.
    ///
    /// Traps if called before `init`.
    pub fn rescale(&mut self) {
        self.inner.rescale();
    }

    /// Clears and removes the canvas. No-op before `init`.
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    /// Whether the canvas currently exists.
    #[wasm_bindgen(getter, js_name = isInitialized)]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    /// Logical width the canvas was last sized to, or `0`.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.inner.extent().map_or(0.0, |extent| extent.width)
    }

    /// Logical height the canvas was last sized to, or `0`.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.inner.extent().map_or(0.0, |extent| extent.height)
    }
}
