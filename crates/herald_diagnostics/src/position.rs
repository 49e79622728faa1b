//! Line/column positions within a source file.

use serde::{Deserialize, Serialize};

/// A (line, column) location in a file or source content.
///
/// Both fields are 1-based when known; 0 means unknown. A position with both
/// fields 0 is "unset". Columns count raw bytes of the source line.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// The line number, beginning at 1, or 0 if unknown.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub line: u32,
    /// The column number, beginning at 1, or 0 if unknown.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub column: u32,
}

impl Position {
    /// A position with neither line nor column known.
    pub const UNSET: Position = Position { line: 0, column: 0 };

    /// Creates a position from a line and column.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns `true` if the line is known.
    pub fn has_line(&self) -> bool {
        self.line != 0
    }

    /// Returns `true` if the column is known.
    pub fn has_column(&self) -> bool {
        self.column != 0
    }

    /// Returns `true` if either the line or the column is known.
    pub fn is_set(&self) -> bool {
        self.has_line() || self.has_column()
    }

    /// Returns `true` if neither the line nor the column is known.
    pub fn is_unset(&self) -> bool {
        !self.is_set()
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        let pos = Position::default();
        assert_eq!(pos, Position::UNSET);
        assert!(pos.is_unset());
        assert!(!pos.has_line());
        assert!(!pos.has_column());
    }

    #[test]
    fn partially_known() {
        let pos = Position::new(3, 0);
        assert!(pos.is_set());
        assert!(pos.has_line());
        assert!(!pos.has_column());

        let pos = Position::new(0, 9);
        assert!(pos.is_set());
        assert!(pos.has_column());
    }

    #[test]
    fn serde_omits_zero_fields() {
        assert_eq!(
            serde_json::to_string(&Position::new(3, 5)).unwrap(),
            r#"{"line":3,"column":5}"#
        );
        assert_eq!(
            serde_json::to_string(&Position::new(3, 0)).unwrap(),
            r#"{"line":3}"#
        );
        let back: Position = serde_json::from_str(r#"{"column":7}"#).unwrap();
        assert_eq!(back, Position::new(0, 7));
    }
}
