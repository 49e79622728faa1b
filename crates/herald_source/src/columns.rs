//! Tab-aware column arithmetic for aligning underlines with displayed source.
//!
//! Excerpted lines are displayed with every tab replaced by [`TAB_WIDTH`]
//! spaces. Raw byte columns reported by tools must go through the same
//! expansion before they can be used to position a caret under that text.

/// The number of spaces a tab occupies in displayed excerpts.
pub const TAB_WIDTH: usize = 3;

/// Replaces every tab in `line` with [`TAB_WIDTH`] spaces.
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Returns the visual width of the first `column` bytes of `line`.
///
/// `column` is a 1-based raw byte column, so the byte it points at is
/// included: a tab counts [`TAB_WIDTH`], any other byte counts 1. Columns past
/// the end of the line stop at the line's full width.
pub fn visual_column(line: &str, column: u32) -> usize {
    line.bytes()
        .take(column as usize)
        .map(|b| if b == b'\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Returns the number of decimal digits needed to print `n`.
pub fn count_digits(n: u32) -> usize {
    if n == 0 {
        return 1;
    }
    n.ilog10() as usize + 1
}
