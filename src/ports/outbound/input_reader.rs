use crate::shared::Result;
use std::path::Path;

/// InputReader port for reading build inputs
///
/// This port abstracts the file system operations needed to load the
/// build snapshot, the fraction catalog and artifact spec lists.
pub trait InputReader {
    /// Reads the whole file at `path`
    ///
    /// # Arguments
    /// * `path` - Path to the input file
    ///
    /// # Returns
    /// The raw file content as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file exceeds the maximum accepted size
    fn read_input(&self, path: &Path) -> Result<String>;
}
