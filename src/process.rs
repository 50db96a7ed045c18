//! Batch conversion of PNG originals into WebP thumbnails.
//!
//! For each source image, generates three center-cropped density variants:
//!
//! ```text
//! originals/circuit.png (any size ≥ 1200x675)
//!   └─ center crop 1200x675
//!        ├─ static/presets/circuit_160.webp   160x90   q85  (1x)
//!        ├─ static/presets/circuit_320.webp   320x180  q85  (2x)
//!        └─ static/presets/circuit_480.webp   480x270  q90  (3x)
//! ```
//!
//! ## Failure isolation
//!
//! A source that cannot be decoded, is too small to crop, or fails to encode
//! becomes a [`FileOutcome::Failed`] and the batch moves on. Run-level
//! problems (no usable source directory, an output directory that cannot be
//! created) end the run early with a matching [`RunReport`] variant. [`run`]
//! itself never fails.
//!
//! Files are processed one at a time in name order. Outputs are always
//! regenerated; there is no freshness check against existing files.

use crate::imaging::{
    BackendError, CROP_HEIGHT, CROP_WIDTH, Dimensions, GeneratedVariant, ImageBackend,
    OUTPUT_VARIANTS, RustBackend, center_crop, generate_variants,
};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};

/// Where the PNG originals live, relative to the working directory.
pub const SOURCE_DIR: &str = "assets-source/presets/originals";
/// Where the WebP thumbnails are written, relative to the working directory.
pub const OUTPUT_DIR: &str = "static/presets";

/// Result of converting a single source file.
#[derive(Debug)]
pub enum FileOutcome {
    Processed {
        name: String,
        variants: Vec<GeneratedVariant>,
    },
    Failed {
        name: String,
        error: BackendError,
    },
}

impl FileOutcome {
    /// Source file name, e.g. `circuit.png`.
    pub fn name(&self) -> &str {
        match self {
            FileOutcome::Processed { name, .. } | FileOutcome::Failed { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Processed { .. })
    }
}

/// What a whole run did.
#[derive(Debug)]
pub enum RunReport {
    /// The source directory does not exist; nothing was touched.
    SourceMissing { source_dir: PathBuf },
    /// The source path exists but is not a usable directory.
    SourceUnreadable {
        source_dir: PathBuf,
        error: ScanError,
    },
    /// The source directory holds no PNGs; nothing was written.
    NoSources { source_dir: PathBuf },
    /// The output directory could not be created; no source was opened.
    OutputUnwritable {
        output_dir: PathBuf,
        error: std::io::Error,
    },
    /// Every source was attempted, in order.
    Completed {
        output_dir: PathBuf,
        outcomes: Vec<FileOutcome>,
    },
}

impl RunReport {
    pub fn processed_count(&self) -> usize {
        self.outcomes().iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes().iter().filter(|o| !o.is_success()).count()
    }

    fn outcomes(&self) -> &[FileOutcome] {
        match self {
            RunReport::Completed { outcomes, .. } => outcomes,
            _ => &[],
        }
    }
}

/// Convert every PNG in `source_dir` into thumbnails in `output_dir`.
///
/// `on_file` is called after each source is handled, before the next one
/// starts, so progress can be shown while the batch runs.
pub fn run(source_dir: &Path, output_dir: &Path, on_file: impl FnMut(&FileOutcome)) -> RunReport {
    run_with_backend(&RustBackend::new(), source_dir, output_dir, on_file)
}

/// Run the batch using a specific backend (allows testing with mock).
pub fn run_with_backend<B: ImageBackend>(
    backend: &B,
    source_dir: &Path,
    output_dir: &Path,
    mut on_file: impl FnMut(&FileOutcome),
) -> RunReport {
    if !source_dir.exists() {
        return RunReport::SourceMissing {
            source_dir: source_dir.to_path_buf(),
        };
    }

    let mut sources = match scan::iter_pngs(source_dir) {
        Ok(sources) => sources.peekable(),
        Err(error) => {
            return RunReport::SourceUnreadable {
                source_dir: source_dir.to_path_buf(),
                error,
            };
        }
    };
    if sources.peek().is_none() {
        return RunReport::NoSources {
            source_dir: source_dir.to_path_buf(),
        };
    }

    if let Err(error) = std::fs::create_dir_all(output_dir) {
        return RunReport::OutputUnwritable {
            output_dir: output_dir.to_path_buf(),
            error,
        };
    }

    let mut outcomes = Vec::new();
    for path in sources {
        let outcome = process_one(backend, &path, output_dir);
        on_file(&outcome);
        outcomes.push(outcome);
    }

    RunReport::Completed {
        output_dir: output_dir.to_path_buf(),
        outcomes,
    }
}

/// Open, crop and write all variants for one source.
///
/// Never fails: any error is captured in the returned outcome. The decoded
/// image and its crop are dropped before this returns.
pub fn process_one<B: ImageBackend>(backend: &B, path: &Path, output_dir: &Path) -> FileOutcome {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match convert(backend, path, output_dir) {
        Ok(variants) => FileOutcome::Processed { name, variants },
        Err(error) => FileOutcome::Failed { name, error },
    }
}

fn convert<B: ImageBackend>(
    backend: &B,
    path: &Path,
    output_dir: &Path,
) -> Result<Vec<GeneratedVariant>, BackendError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let source = backend.open(path)?;
    let cropped = center_crop(
        backend,
        &source,
        Dimensions {
            width: CROP_WIDTH,
            height: CROP_HEIGHT,
        },
    )?;
    drop(source);

    generate_variants(backend, &cropped, &OUTPUT_VARIANTS, &stem, output_dir)
}
