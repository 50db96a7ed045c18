//! Fixed parameters for the preset thumbnail pipeline.
//!
//! Every image tunable lives here as a constant. There is no config file:
//! changing the output means changing this module and rebuilding.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100). Clamped on construction.
//! - [`OutputVariant`] — One output resolution plus its encoding quality.
//! - [`VariantParams`] — Full specification for writing one variant to disk.

use std::path::PathBuf;

/// Width of the center crop taken from every source image.
pub const CROP_WIDTH: u32 = 1200;
/// Height of the center crop taken from every source image.
pub const CROP_HEIGHT: u32 = 675;

/// Logical (1x) thumbnail width.
pub const THUMB_WIDTH: u32 = 160;
/// Logical (1x) thumbnail height.
pub const THUMB_HEIGHT: u32 = 90;

pub const QUALITY_BASE: Quality = Quality(85);
pub const QUALITY_HIGH: Quality = Quality(90);

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// A single output resolution with its encoding quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputVariant {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

impl OutputVariant {
    /// Variant at `multiplier` times the base thumbnail size.
    pub const fn dpr(multiplier: u32, quality: Quality) -> Self {
        Self {
            width: THUMB_WIDTH * multiplier,
            height: THUMB_HEIGHT * multiplier,
            quality,
        }
    }
}

/// 1x, 2x and 3x density variants, in output order.
pub const OUTPUT_VARIANTS: [OutputVariant; 3] = [
    OutputVariant::dpr(1, QUALITY_BASE),
    OutputVariant::dpr(2, QUALITY_BASE),
    OutputVariant::dpr(3, QUALITY_HIGH),
];

/// Parameters for resizing an in-memory image and writing it as WebP.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantParams {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
