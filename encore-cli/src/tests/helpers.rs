//! Test helpers for writing event fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use encore_core::Event;
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn write_events(path: &Utf8Path, events: &[Event]) {
    let payload = serde_json::to_string_pretty(events).expect("serialize events");
    write_utf8(path, payload.as_bytes());
}

/// A temporary workspace holding an `events.json` path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn sample_events() -> Vec<Event> {
    vec![
        Event::new("Nova", "2024-04-10", "Lisbon", 38.72, -9.14),
        Event::new("Quill", "2024-04-10", "Porto", 41.15, -8.61),
        Event::new("Orbit", "2024-04-02", "Madrid", 40.42, -3.70),
        Event::new("Orbit", "2024-04-20", "Seville", 37.39, -5.98),
    ]
}
