use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::DatasetError;
use crate::types::ClassName;

/// List filenames directly inside `dir` with a matching extension.
///
/// Extensions are compared case-insensitively against the dotless,
/// lower-cased entries in `extensions`. A missing `dir` yields an empty
/// list, not an error: class directories without a `test/` subdirectory
/// are expected. Subdirectories are not descended into. Order is whatever
/// the filesystem reports; callers must not rely on a lexical sort.
pub fn matching_filenames(dir: &Path, extensions: &[String]) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_matching_extension(entry.path(), extensions))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect()
}

/// Enumerate the immediate subdirectories of `root` as class names.
///
/// An entry is a class if and only if it is a directory (symlinks to
/// directories included). Non-directory entries are ignored. Order is the
/// filesystem's enumeration order at call time; only the persisted index
/// makes it reproducible across runs.
pub fn discover_classes(root: &Path) -> Result<Vec<ClassName>, DatasetError> {
    let entries = fs::read_dir(root).map_err(|err| DatasetError::RootNotAccessible {
        path: root.to_path_buf(),
        source: err,
    })?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| DatasetError::RootNotAccessible {
            path: root.to_path_buf(),
            source: err,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// True if the path's extension is a case-insensitive member of `extensions`.
pub(crate) fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn jpg_only() -> Vec<String> {
        vec!["jpg".to_string()]
    }

    #[test]
    fn matches_extensions_case_insensitively() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.jpg"), b"x").unwrap();
        fs::write(temp.path().join("b.JPG"), b"x").unwrap();
        fs::write(temp.path().join("c.Jpeg"), b"x").unwrap();
        fs::write(temp.path().join("notes.txt"), b"x").unwrap();

        let mut names = matching_filenames(temp.path(), &jpg_only());
        names.sort();
        assert_eq!(names, vec!["a.jpg".to_string(), "b.JPG".to_string()]);
    }

    #[test]
    fn missing_dir_yields_empty_list() {
        let temp = tempdir().unwrap();
        let names = matching_filenames(&temp.path().join("absent"), &jpg_only());
        assert!(names.is_empty());
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("top.jpg"), b"x").unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.jpg"), b"x").unwrap();

        let names = matching_filenames(temp.path(), &jpg_only());
        assert_eq!(names, vec!["top.jpg".to_string()]);
    }

    #[test]
    fn files_without_extension_are_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("README"), b"x").unwrap();
        assert!(matching_filenames(temp.path(), &jpg_only()).is_empty());
    }

    #[test]
    fn discovery_ignores_plain_files() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("cirrus")).unwrap();
        fs::create_dir(temp.path().join("cumulus")).unwrap();
        fs::write(temp.path().join("stray.jpg"), b"x").unwrap();

        let mut classes = discover_classes(temp.path()).unwrap();
        classes.sort();
        assert_eq!(classes, vec!["cirrus".to_string(), "cumulus".to_string()]);
    }

    #[test]
    fn discovery_surfaces_missing_root() {
        let temp = tempdir().unwrap();
        let err = discover_classes(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RootNotAccessible { ref path, .. } if path.ends_with("absent")
        ));
    }
}
