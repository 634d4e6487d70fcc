//! Line-oriented view of a migration file

use crate::error::{GuardError, GuardResult};
use std::path::{Path, PathBuf};

/// A migration file split into lines.
///
/// Each line keeps its own terminator (`\n`, `\r\n`, or none for an
/// unterminated final line) so that joining the lines reproduces the file
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Location on disk
    pub path: PathBuf,

    /// Lines in file order, terminators included
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Build a source file from in-memory text
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    /// Read a file from disk
    pub fn load(path: &Path) -> GuardResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GuardError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_text(path, &text))
    }

    /// Overwrite the file on disk with `lines`
    pub fn write_lines(path: &Path, lines: &[String]) -> GuardResult<()> {
        std::fs::write(path, lines.concat()).map_err(|e| GuardError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Split text into lines, keeping each line's terminator attached
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// The terminator a line ends with, or `""` for an unterminated line
pub fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_keeps_terminators() {
        let lines = split_lines("a\nb\r\nc");
        assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_line_terminator() {
        assert_eq!(line_terminator("x\n"), "\n");
        assert_eq!(line_terminator("x\r\n"), "\r\n");
        assert_eq!(line_terminator("x"), "");
    }

    #[test]
    fn test_load_and_write_preserve_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("001.sql");
        let text = "-- header\r\nSELECT 1;\nSELECT 2;";
        std::fs::write(&path, text).unwrap();

        let file = SourceFile::load(&path).unwrap();
        assert_eq!(file.lines.len(), 3);

        SourceFile::write_lines(&path, &file.lines).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = SourceFile::load(&dir.path().join("missing.sql")).unwrap_err();
        assert!(matches!(err, GuardError::FileRead { .. }));
    }
}
