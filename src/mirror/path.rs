//! Path absolutization and normalization utilities

use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Resolve a user-supplied folder to an absolute, normalized path
///
/// This function:
/// 1. Joins relative paths onto the current directory
/// 2. Canonicalizes the deepest existing ancestor (resolves symlinks, `..`, `.`)
///    and resolves `.` and `..` in the missing tail lexically
/// 3. Normalizes Unicode to NFC
/// 4. Removes trailing slashes (except root)
pub fn absolutize(path: &Path) -> Result<PathBuf, StorageError> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::InvalidPath("empty folder path".to_string()));
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    // Canonicalize the deepest existing ancestor and keep the missing tail as given.
    let existing = joined
        .ancestors()
        .find(|ancestor| ancestor.exists())
        .unwrap_or(joined.as_path());
    let mut absolute = dunce::canonicalize(existing).map_err(|e| {
        StorageError::InvalidPath(format!("Failed to canonicalize {}: {}", path.display(), e))
    })?;
    if let Ok(tail) = joined.strip_prefix(existing) {
        push_resolved(&mut absolute, tail);
    }

    Ok(PathBuf::from(normalize_path_string(&absolute.to_string_lossy())))
}

/// Append `tail` to `base`, dropping `.` and popping one component per `..`.
///
/// The tail does not exist on disk yet, so there are no symlinks to honour.
fn push_resolved(base: &mut PathBuf, tail: &Path) {
    for component in tail.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            Component::Normal(name) => base.push(name),
            Component::RootDir | Component::Prefix(_) => base.push(component.as_os_str()),
        }
    }
}

/// Normalize a path string for comparison (without filesystem access)
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();

    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    result
}

/// Whether `target` sits inside (or is) `source`.
///
/// This is a plain string-prefix test on the normalized paths, so a sibling
/// such as `/work/src-copy` also counts as nested under `/work/src`.
pub fn is_nested(source: &Path, target: &Path) -> bool {
    let source = normalize_path_string(&source.to_string_lossy());
    let target = normalize_path_string(&target.to_string_lossy());
    target.starts_with(&source)
}
