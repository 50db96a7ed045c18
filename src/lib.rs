//! # Preset Thumbs
//!
//! One-shot batch converter for preset preview images. Every PNG original in
//! a source directory is center-cropped to 1200x675 and written as three
//! WebP thumbnails for 1x, 2x and 3x displays.
//!
//! ```text
//! assets-source/presets/originals/circuit.png
//!     → static/presets/circuit_160.webp   (160x90,  q85)
//!     → static/presets/circuit_320.webp   (320x180, q85)
//!     → static/presets/circuit_480.webp   (480x270, q90)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the `*.png` sources in name order |
//! | [`process`] | Per-file pipeline and batch run with isolated failures |
//! | [`imaging`] | Crop geometry, fixed variant list, decode/resize/encode backend |
//! | [`output`] | Console line formatting |
//!
//! # Design Decisions
//!
//! ## Constants, Not Config
//!
//! Crop size, thumbnail base size and qualities are compile-time constants
//! in [`imaging::params`]. The only runtime knobs are the two directories.
//!
//! ## Outcomes, Not Early Returns
//!
//! [`process::process_one`] never returns an error. Each file yields a
//! [`process::FileOutcome`], and the batch collects them into a
//! [`process::RunReport`]. One broken original cannot stop the others, and
//! the process exits successfully no matter how many files failed.
//!
//! ## Always Regenerate
//!
//! Existing outputs are overwritten on every run. There is no cache and no
//! modification-time check.

pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
