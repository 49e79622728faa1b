//! Source file representation with line-start indexing for 1-based line lookup.

use std::io;
use std::path::{Path, PathBuf};

/// A source file read from disk (or supplied in memory) for excerpting.
///
/// Lines are delimited by `\n` only. A trailing newline therefore produces a
/// final empty line, and a `\r` before the newline stays part of the line text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// The path this file was loaded from (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Creates a `SourceFile` from in-memory content.
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Reads a file from the filesystem.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, so any
    /// readable file can be excerpted.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let bytes = std::fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(path, content))
    }

    /// Returns the number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of the 1-based `line`, without its line feed.
    ///
    /// Returns `None` for line 0 and for lines past the end of the file.
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |next| next - 1);
        Some(&self.content[start..end])
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new("test.txt", content.to_string())
    }

    #[test]
    fn line_starts_computation() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_starts, vec![0, 4, 8]);
        assert_eq!(f.line_count(), 3);
    }

    #[test]
    fn line_lookup_is_one_based() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line(1), Some("abc"));
        assert_eq!(f.line(2), Some("def"));
        assert_eq!(f.line(3), Some("ghi"));
    }

    #[test]
    fn line_zero_and_past_end() {
        let f = make_file("abc\ndef");
        assert_eq!(f.line(0), None);
        assert_eq!(f.line(3), None);
        assert_eq!(f.line(u32::MAX), None);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let f = make_file("abc\n");
        assert_eq!(f.line_count(), 2);
        assert_eq!(f.line(2), Some(""));
    }

    #[test]
    fn carriage_return_is_kept() {
        let f = make_file("abc\r\ndef\r\n");
        assert_eq!(f.line(1), Some("abc\r"));
        assert_eq!(f.line(2), Some("def\r"));
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_starts, vec![0]);
        assert_eq!(f.line(1), Some(""));
    }

    #[test]
    fn load_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "first\n\tsecond\n").unwrap();
        let f = SourceFile::load(tmp.path()).unwrap();
        assert_eq!(f.path, tmp.path());
        assert_eq!(f.line(2), Some("\tsecond"));
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceFile::load(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"ok\n\xff\xfe\n").unwrap();
        let f = SourceFile::load(tmp.path()).unwrap();
        assert_eq!(f.line(1), Some("ok"));
        assert!(f.line(2).unwrap().contains('\u{FFFD}'));
    }
}
