//! Greedy word wrapping for message bodies.

/// The wrap width used when none is configured or the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 120;

/// Breaks text into lines no wider than a maximum column width.
///
/// Lines are broken between words, never inside one; a word longer than the
/// width sits on a line of its own. Runs of whitespace between words collapse
/// to a single space. Each input line (split on `\n`) is wrapped on its own, and
/// a blank or whitespace-only input line becomes an empty output line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Wrapper {
    max_width: usize,
}

impl Wrapper {
    /// Creates a wrapper for `max_width` columns. A width of 0 means
    /// [`DEFAULT_WIDTH`].
    pub fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Creates a wrapper sized to the controlling terminal's width.
    ///
    /// Returns `None` if the terminal size cannot be determined.
    pub fn from_terminal() -> Option<Self> {
        match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => Some(Self::new(columns as usize)),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("cannot determine terminal width: {e}");
                None
            }
        }
    }

    /// Returns the effective width, applying the default for 0.
    pub fn max_width(&self) -> usize {
        if self.max_width == 0 {
            DEFAULT_WIDTH
        } else {
            self.max_width
        }
    }

    /// Wraps `text` and joins the resulting lines with `\n`.
    pub fn wrap(&self, text: &str) -> String {
        self.lines(text).join("\n")
    }

    /// Wraps `text` into individual lines.
    ///
    /// Empty input produces no lines.
    pub fn lines(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let width = self.max_width();
        let mut out = Vec::new();
        for line in text.split('\n') {
            let mut current = String::new();
            for word in line.split_whitespace() {
                if !current.is_empty() && current.len() + word.len() + 1 > width {
                    out.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            // A whitespace-only line pushes the empty string.
            out.push(current);
        }
        out
    }
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_between_words() {
        assert_eq!(Wrapper::new(3).lines("a b c"), vec!["a b", "c"]);
    }

    #[test]
    fn whitespace_only_line_is_empty() {
        assert_eq!(Wrapper::new(10).lines("   \t "), vec![""]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(Wrapper::new(10).lines("").is_empty());
    }

    #[test]
    fn zero_width_uses_default() {
        assert_eq!(Wrapper::new(0).max_width(), DEFAULT_WIDTH);
        let text = "word ".repeat(30);
        let lines = Wrapper::new(0).lines(&text);
        assert!(lines.iter().all(|l| l.len() <= DEFAULT_WIDTH));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(
            Wrapper::new(80).lines("  lots   of\t\tspace  "),
            vec!["lots of space"]
        );
    }

    #[test]
    fn long_word_is_not_split() {
        assert_eq!(
            Wrapper::new(4).lines("tiny enormousword x"),
            vec!["tiny", "enormousword", "x"]
        );
    }

    #[test]
    fn input_lines_wrap_independently() {
        assert_eq!(
            Wrapper::new(20).lines("first para\n\nsecond para"),
            vec!["first para", "", "second para"]
        );
    }

    #[test]
    fn wrap_joins_with_newlines() {
        assert_eq!(Wrapper::new(5).wrap("one two three"), "one\ntwo\nthree");
    }

    #[test]
    fn fits_exactly() {
        assert_eq!(Wrapper::new(7).lines("abc def"), vec!["abc def"]);
        assert_eq!(Wrapper::new(6).lines("abc def"), vec!["abc", "def"]);
    }
}
