//! Input abstraction for the calculator

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CalcError, Result};

/// Source of a single calculator input
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input; the whole file is one input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the input as bytes, refusing anything larger than `limit`
    pub(crate) fn into_bytes(self, limit: usize) -> Result<Vec<u8>> {
        let bytes = match self {
            Input::Text(text) => text.into_bytes(),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => {
                let file = std::fs::File::open(&path)?;
                read_limited(file, limit)?
            }
            Input::Reader(reader) => read_limited(reader, limit)?,
        };

        if bytes.len() > limit {
            return Err(CalcError::InputTooLarge {
                size: bytes.len(),
                limit,
            });
        }

        Ok(bytes)
    }

    /// Read the input as UTF-8 text, refusing anything larger than `limit`
    pub(crate) fn into_text(self, limit: usize) -> Result<String> {
        let bytes = self.into_bytes(limit)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Read at most `limit + 1` bytes so oversized streams are detected without buffering them
fn read_limited(reader: impl Read, limit: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_input() {
        let text = Input::from_text("1,2").into_text(1024).unwrap();
        assert_eq!(text, "1,2");
    }

    #[test]
    fn test_bytes_input() {
        let bytes = Input::from_bytes(b"//;\n1;2".to_vec())
            .into_bytes(1024)
            .unwrap();
        assert_eq!(bytes, b"//;\n1;2");
    }

    #[test]
    fn test_reader_input() {
        let text = Input::from_reader(Cursor::new(b"4\n5".to_vec()))
            .into_text(1024)
            .unwrap();
        assert_eq!(text, "4\n5");
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "//[***]\n1***2").unwrap();

        let text = Input::from_file(file.path()).into_text(1024).unwrap();
        assert_eq!(text, "//[***]\n1***2");
    }

    #[test]
    fn test_missing_file() {
        let result = Input::from_file("/nonexistent/input.txt").into_text(1024);
        assert!(matches!(result, Err(CalcError::Io(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        let result = Input::from_bytes(vec![b'1', 0xff]).into_text(1024);
        assert!(matches!(result, Err(CalcError::InvalidUtf8(_))));
    }

    #[test]
    fn test_limit_enforced_for_every_source() {
        let too_large = "1,".repeat(8);

        assert!(matches!(
            Input::from_text(too_large.clone()).into_text(4),
            Err(CalcError::InputTooLarge { limit: 4, .. })
        ));
        assert!(matches!(
            Input::from_reader(Cursor::new(too_large.into_bytes())).into_text(4),
            Err(CalcError::InputTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug_str = format!("{:?}", Input::from_text("secret"));
        assert!(debug_str.contains("length"));
        assert!(!debug_str.contains("secret"));
    }
}
