//! File system utilities

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against the working directory and removes `.`,
/// `..` and redundant separators without touching the file system.
///
/// If the working directory cannot be read, a relative path is only
/// normalized.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// True if `path` is a directory (following symlinks). Errors count as no.
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

/// Shortens long paths for display
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.len() <= max_length {
        return path.to_string();
    }

    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    // Keep last 2 components with ellipsis prefix
    format!(
        ".../{}/{}",
        components[components.len() - 2],
        components[components.len() - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_normalize_removes_dots() {
        assert_eq!(
            normalize_path(Path::new("/a/./b/../c//d")),
            PathBuf::from("/a/c/d")
        );
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize_path(Path::new("/a/b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_makes_relative_absolute() {
        let normalized = normalize_path(Path::new("some/relative/../file.txt"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("some/file.txt"));
    }

    #[test]
    fn test_shorten_path() {
        assert_eq!(shorten_path("/short", 30), "/short");
        assert_eq!(
            shorten_path("/very/long/path/to/some/.snap/snapshot-1", 20),
            ".../.snap/snapshot-1"
        );
        assert_eq!(
            shorten_path("/only-one-very-long-component", 5),
            "/only-one-very-long-component"
        );
    }
}
