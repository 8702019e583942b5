use crate::ports::outbound::InputReader;
use crate::shared::error::ResolverError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading build inputs from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after checking that it is a regular, non-symlinked
    /// file of acceptable size
    fn safe_read_file(&self, path: &Path) -> std::result::Result<String, String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| e.to_string())?;

        if metadata.is_symlink() {
            return Err(
                "Security: symbolic links are not accepted as input files".to_string(),
            );
        }

        if !metadata.is_file() {
            return Err("Not a regular file".to_string());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, MAX_FILE_SIZE
            ));
        }

        fs::read_to_string(path).map_err(|e| e.to_string())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InputReader for FileSystemReader {
    fn read_input(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path).map_err(|details| {
            ResolverError::FileReadError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, "{}").unwrap();

        let content = FileSystemReader::new().read_input(&path).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_read_input_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = FileSystemReader::new().read_input(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read file"));
        assert!(message.contains("missing.json"));
    }

    #[test]
    fn test_read_input_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemReader::new().read_input(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_input_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_input(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic links"));
    }
}
