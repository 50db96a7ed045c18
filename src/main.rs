use clap::Parser;
use preset_thumbs::{output, process};
use std::path::Path;

#[derive(Parser)]
#[command(name = "preset-thumbs")]
#[command(version)]
#[command(about = "Generate cropped WebP thumbnails from PNG originals")]
#[command(long_about = "\
Generate cropped WebP thumbnails from PNG originals

Every *.png directly inside assets-source/presets/originals/ is
center-cropped to 1200x675 and written to static/presets/ as three density
variants:

  <name>_160.webp   160x90   quality 85   (1x)
  <name>_320.webp   320x180  quality 85   (2x)
  <name>_480.webp   480x270  quality 90   (3x)

Existing outputs are overwritten. Files that fail (unreadable, smaller than
1200x675) are reported and skipped.")]
struct Cli {}

fn main() {
    Cli::parse();

    let report = process::run(
        Path::new(process::SOURCE_DIR),
        Path::new(process::OUTPUT_DIR),
        output::print_file_outcome,
    );
    output::print_run_report(&report);
}
