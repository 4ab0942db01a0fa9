use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read a file as text, tolerating bytes that are not valid UTF-8.
/// Undecodable bytes become replacement characters.
pub fn read_file_lossy(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file (lossy): {}", path.display());

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write string content to a file, creating parent directories if needed
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("a").join("b").join("page.tsx");

        write_file_sync(&file_path, "content\n").unwrap();
        assert!(file_exists(&file_path));
        assert_eq!(read_file_to_string(&file_path).unwrap(), "content\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        assert!(read_file_to_string(&missing).is_err());
        assert!(!file_exists(&missing));
    }

    #[test]
    fn test_read_file_lossy_replaces_invalid_bytes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("raw.txt");
        fs::write(&file_path, [b'a', 0xff, b'b']).unwrap();

        let content = read_file_lossy(&file_path).unwrap();
        assert_eq!(content, "a\u{fffd}b");
    }
}
