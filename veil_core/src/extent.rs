// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page extent measurement.
//!
//! The overlay must cover the whole scrollable page, not just the viewport.
//! [`measure`] combines the root content element's scroll extent with its
//! offset extent, taking the larger along each axis.

use kurbo::Size;

use crate::surface::Host;

/// Raw extents of the page's root content element, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentMetrics {
    /// `scrollWidth` × `scrollHeight`.
    pub scroll: Size,
    /// `offsetWidth` × `offsetHeight`.
    pub offset: Size,
}

impl DocumentMetrics {
    /// Returns the full page extent described by these metrics.
    #[must_use]
    pub fn extent(&self) -> Size {
        Size::new(
            self.scroll.width.max(self.offset.width),
            self.scroll.height.max(self.offset.height),
        )
    }
}

/// Measures the full scrollable extent of the host's page.
///
/// Never cached: page content can change between calls, so every surface
/// creation and rescale reads fresh metrics.
#[must_use]
pub fn measure<H: Host + ?Sized>(host: &H) -> Size {
    host.document_metrics().extent()
}
