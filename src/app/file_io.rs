use crate::app::error::FileError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Reads and writes whole text files. The handle is dropped at the end of
/// each call, on the error paths too.
pub struct FileIo;

impl FileIo {
    /// Writes `content` plus a trailing newline, creating or truncating the file.
    pub fn write_content_to_file(content: &str, file_path: &Path) -> Result<(), FileError> {
        let creation = |source| FileError::Creation {
            path: file_path.to_path_buf(),
            source,
        };

        let mut file = File::create(file_path).map_err(creation)?;
        writeln!(file, "{}", content).map_err(creation)?;
        file.flush().map_err(creation)
    }

    /// Reads the whole file as UTF-8 text. Control characters and spaces are
    /// trimmed at both ends; other Unicode whitespace is kept.
    pub fn read_content_from_file(file_path: &Path) -> Result<String, FileError> {
        let missing = |source| FileError::Missing {
            path: file_path.to_path_buf(),
            source,
        };

        let mut file = File::open(file_path).map_err(missing)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(missing)?;

        Ok(content.trim_matches(|c: char| c <= ' ').to_string())
    }
}
