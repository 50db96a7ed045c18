//! Shared test utilities for the preset-thumbs test suite.
//!
//! Unit tests run against `MockBackend`, which never reads file contents, so
//! sources only need to exist on disk. Tests that decode real pixels live in
//! `tests/`.

use std::path::Path;

/// Create empty files with the given names in `dir`.
pub fn touch_sources(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}
