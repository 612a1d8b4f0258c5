use std::fs;
use std::io;
use std::path::Path;

// @module: File utilities for exercise data files

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a whole file into a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Replace the content of a file, truncating it first.
    ///
    /// The write is not atomic: a failure part way through leaves a
    /// truncated file behind.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}
