//! File scanning backend
//!
//! Uses walkdir to list the source files under the project root. Excluded
//! folders are pruned without being entered; the result is sorted by file
//! name at every level so repeated runs see the same order.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::Config;
use crate::core::error::ScanError;

/// Collect every file under `root` that the configuration selects.
///
/// A directory that cannot be read aborts the scan: a partial file list
/// would silently under-count the corpus.
pub fn collect_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>, ScanError> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry, config));

    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ScanError::Traversal { path, source }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };

        if config.excluded_files.contains(name) || !config.matches_extension(name) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, config: &Config) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| config.excluded_folders.contains(name))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::make_relative;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .filter_map(|f| make_relative(f, root))
            .collect()
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = tempdir().unwrap();
        let files = collect_files(temp.path(), &Config::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_filters_extension_and_sorts() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("b.js")).unwrap();
        File::create(temp.path().join("a.js")).unwrap();
        File::create(temp.path().join("notes.txt")).unwrap();
        File::create(temp.path().join("data.json")).unwrap();
        fs::create_dir(temp.path().join("lib")).unwrap();
        File::create(temp.path().join("lib/util.js")).unwrap();

        let files = collect_files(temp.path(), &Config::default()).unwrap();
        assert_eq!(
            relative(&files, temp.path()),
            vec!["a.js", "b.js", "lib/util.js"]
        );
    }

    #[test]
    fn test_scan_skips_excluded_folders() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("index.js")).unwrap();
        for dir in ["node_modules/pkg", "coverage", "tests", "src/tests"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
            File::create(temp.path().join(dir).join("x.js")).unwrap();
        }

        let files = collect_files(temp.path(), &Config::default()).unwrap();
        assert_eq!(relative(&files, temp.path()), vec!["index.js"]);
    }

    #[test]
    fn test_scan_skips_excluded_files() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("index.js")).unwrap();
        File::create(temp.path().join("bundle.js")).unwrap();

        let config = Config::default().with_excluded_files(["bundle.js"]);
        let files = collect_files(temp.path(), &config).unwrap();
        assert_eq!(relative(&files, temp.path()), vec!["index.js"]);
    }

    #[test]
    fn test_excluded_folder_name_as_root_is_scanned() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("tests");
        fs::create_dir(&root).unwrap();
        File::create(root.join("spec.js")).unwrap();

        let files = collect_files(&root, &Config::default()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_scan_custom_extensions() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("a.js")).unwrap();
        File::create(temp.path().join("b.mjs")).unwrap();

        let config = Config::default().with_extensions(["mjs"]);
        let files = collect_files(temp.path(), &config).unwrap();
        assert_eq!(relative(&files, temp.path()), vec!["b.mjs"]);
    }

    #[test]
    fn test_scan_missing_root_is_traversal_error() {
        let temp = tempdir().unwrap();
        let err = collect_files(&temp.path().join("missing"), &Config::default()).unwrap_err();
        assert!(matches!(err, ScanError::Traversal { .. }));
    }
}
