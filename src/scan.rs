//! Source enumeration.
//!
//! Finds the PNG originals to convert: regular files directly inside the
//! source directory whose extension is exactly `png`, in lexicographic file
//! name order. Subdirectories are not descended into.
//!
//! ```text
//! originals/
//! ├── adder.png        ✓
//! ├── circuit.png      ✓
//! ├── notes.txt        ✗ wrong extension
//! ├── LOGO.PNG         ✗ extension is case-sensitive
//! ├── folder.png/      ✗ not a regular file
//! └── nested/
//!     └── deep.png     ✗ not directly inside
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

const SOURCE_EXTENSION: &str = "png";

/// Enumerate the PNG sources in `dir`.
///
/// The returned iterator is lazy and single-pass. `dir` must be a directory;
/// once it is, entries that cannot be read (including the listing itself)
/// are skipped, so an unlistable directory yields nothing.
pub fn iter_pngs(dir: &Path) -> Result<impl Iterator<Item = PathBuf>, ScanError> {
    if !std::fs::metadata(dir)?.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_source(p));

    Ok(entries)
}

/// Collect every source in `dir` into a list.
pub fn collect_pngs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    Ok(iter_pngs(dir)?.collect())
}

fn is_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn finds_pngs_in_lexicographic_order() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta.png", "alpha.png", "Beta.png", "mid.png"] {
            touch(tmp.path(), name);
        }

        let found = collect_pngs(tmp.path()).unwrap();

        assert_eq!(names(&found), vec!["Beta.png", "alpha.png", "mid.png", "zeta.png"]);
    }

    #[test]
    fn ignores_other_extensions_and_case() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.png", "b.jpg", "c.PNG", "d.png.bak", "png", "notes.txt"] {
            touch(tmp.path(), name);
        }

        let found = collect_pngs(tmp.path()).unwrap();

        assert_eq!(names(&found), vec!["a.png"]);
    }

    #[test]
    fn skips_directories_and_nested_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("folder.png")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.png");
        touch(tmp.path(), "top.png");

        let found = collect_pngs(tmp.path()).unwrap();

        assert_eq!(names(&found), vec!["top.png"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_pngs(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = collect_pngs(&tmp.path().join("absent"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("originals");
        touch(tmp.path(), "originals");

        let err = collect_pngs(&file).unwrap_err();

        assert!(matches!(&err, ScanError::NotADirectory(p) if p == &file));
        assert!(err.to_string().starts_with("Not a directory: "));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_counts_as_source() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "real.txt");
        std::os::unix::fs::symlink(tmp.path().join("real.txt"), tmp.path().join("link.png"))
            .unwrap();

        let found = collect_pngs(tmp.path()).unwrap();

        assert_eq!(names(&found), vec!["link.png"]);
    }
}
