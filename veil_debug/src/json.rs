// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](crate::recorder::RecorderSink)
//! as a JSON array, one object per event, tagged by
//! [`RecordedEvent::name`].

use std::io::{self, Write};

use kurbo::Size;
use serde_json::{Value, json};
use veil_core::scale::BackingSize;

use crate::recorder::RecordedEvent;

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::SurfaceCreated(e) => json!({
            "event": event.name(),
            "generation": e.generation.0,
            "extent": size(e.extent),
            "backing": backing(e.backing),
            "device_pixel_ratio": e.device_pixel_ratio,
        }),
        RecordedEvent::Rescale(e) => json!({
            "event": event.name(),
            "generation": e.generation.0,
            "previous": size(e.previous),
            "extent": size(e.extent),
            "backing": backing(e.backing),
            "device_pixel_ratio": e.device_pixel_ratio,
        }),
        RecordedEvent::Clear(e) => json!({
            "event": event.name(),
            "generation": e.generation.0,
            "extent": size(e.extent),
        }),
        RecordedEvent::SurfaceDestroyed(e) => json!({
            "event": event.name(),
            "generation": e.generation.0,
            "extent": size(e.extent),
        }),
    }
}

fn size(s: Size) -> Value {
    json!({ "width": s.width, "height": s.height })
}

fn backing(b: BackingSize) -> Value {
    json!({ "width": b.width, "height": b.height })
}
