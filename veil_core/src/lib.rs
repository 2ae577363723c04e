// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle and device-pixel scaling for a full-page annotation overlay.
//!
//! `veil_core` manages exactly one non-interactive drawing surface layered
//! above arbitrary page content. Callers paint ephemeral annotations (for
//! example measurement guides) onto it without disturbing the page's layout or
//! input handling. The crate is `no_std` compatible (with `alloc`) and knows
//! nothing about any particular platform: backends implement the
//! [`Host`](surface::Host) and [`Surface`](surface::Surface) traits.
//!
//! # Architecture
//!
//! ```text
//!   Host::document_metrics() ──► extent::measure() ──► Size (logical px)
//!                                                        │
//!   Host::device_pixel_ratio() ──► scale::normalize() ◄──┘
//!                                        │
//!                                        ▼
//!   surface::create() ──► ActiveSurface ──► Overlay { init, clear, draw,
//!                                                     rescale, destroy }
//! ```
//!
//! **[`extent`]** — Full scrollable extent of the page, measured fresh on
//! every creation and rescale.
//!
//! **[`scale`]** — Backing-store sizing and context transform so drawing
//! commands are expressed in logical pixels at full physical resolution.
//!
//! **[`surface`]** — The backend contract and the factory that creates,
//! styles, sizes, and attaches a new surface.
//!
//! **[`overlay`]** — The [`Overlay`](overlay::Overlay) lifecycle manager that
//! owns the single overlay state.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and lifecycle event
//! types.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Delivers lifecycle events to the
//!   overlay's trace sink. Without it, event emission compiles to nothing.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod extent;
pub mod overlay;
pub mod scale;
pub mod surface;
pub mod trace;

#[cfg(test)]
mod fake;

pub use overlay::{Overlay, OverlayConfig};
pub use surface::{Host, Surface};
