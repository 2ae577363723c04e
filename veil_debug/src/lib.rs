// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for veil overlay diagnostics.
//!
//! This crate provides [`TraceSink`](veil_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — keeps events in memory for inspection.
//! - [`json::export`] — writes recorded events as a JSON array.
//!
//! Enabling this crate turns on `veil_core`'s `trace` feature.

pub mod json;
pub mod pretty;
pub mod recorder;
