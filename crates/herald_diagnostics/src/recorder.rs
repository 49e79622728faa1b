//! An in-memory emitter for asserting on reported diagnostics in tests.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::error::EmitError;
use crate::position::Position;
use crate::severity::Severity;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// A shared list of every diagnostic emitted through it.
///
/// Cloning a `Recorder` yields another handle to the same list, so one clone
/// can be moved into a [`Reporter`](crate::Reporter) while another is kept for
/// inspection.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Takes all recorded diagnostics, leaving the recorder empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the recorded diagnostics that satisfy every condition.
    pub fn filter(&self, conditions: &[Condition]) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| conditions.iter().all(|c| c.matches(d)))
            .cloned()
            .collect()
    }

    /// Returns how many recorded diagnostics satisfy every condition.
    pub fn count(&self, conditions: &[Condition]) -> usize {
        self.lock()
            .iter()
            .filter(|d| conditions.iter().all(|c| c.matches(d)))
            .count()
    }

    /// Returns `true` if at least one recorded diagnostic satisfies every condition.
    pub fn contains(&self, conditions: &[Condition]) -> bool {
        self.count(conditions) > 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Emitter for Recorder {
    fn emit(&mut self, diag: &Diagnostic) -> Result<(), EmitError> {
        self.lock().push(diag.clone());
        Ok(())
    }
}

/// A predicate over a recorded [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The message equals the given text.
    HasMessage(String),
    /// The message contains the given text.
    ContainsMessage(String),
    /// The title equals the given text.
    HasTitle(String),
    /// The title contains the given text.
    ContainsTitle(String),
    /// The severity is one of the given levels.
    HasSeverity(Vec<Severity>),
    /// The code equals the given text.
    HasCode(String),
    /// The file equals the given path.
    HasFile(PathBuf),
    /// The start position equals the given position.
    HasStart(Position),
    /// The end position equals the given position.
    HasEnd(Position),
    /// Both the start and end positions equal the given positions.
    HasRange(Position, Position),
}

impl Condition {
    /// Returns `true` if `diag` satisfies this condition.
    pub fn matches(&self, diag: &Diagnostic) -> bool {
        match self {
            Condition::HasMessage(m) => diag.message == *m,
            Condition::ContainsMessage(m) => diag.message.contains(m.as_str()),
            Condition::HasTitle(t) => diag.title_str().unwrap_or_default() == t.as_str(),
            Condition::ContainsTitle(t) => diag
                .title_str()
                .is_some_and(|title| title.contains(t.as_str())),
            Condition::HasSeverity(levels) => levels.contains(&diag.severity),
            Condition::HasCode(c) => diag.code_str().unwrap_or_default() == c.as_str(),
            Condition::HasFile(f) => diag.file_path().unwrap_or(Path::new("")) == f.as_path(),
            Condition::HasStart(pos) => diag.start == *pos,
            Condition::HasEnd(pos) => diag.end == *pos,
            Condition::HasRange(start, end) => diag.start == *start && diag.end == *end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;

    fn recorded() -> Recorder {
        let mut recorder = Recorder::new();
        let diags = [
            Diagnostic::error("unexpected token").with([
                Annotation::code("E1"),
                Annotation::file("a.rs"),
                Annotation::Start(Position::new(3, 4)),
                Annotation::End(Position::new(3, 8)),
            ]),
            Diagnostic::warning("unused import").with([Annotation::title("Unused")]),
            Diagnostic::debug("token stream dumped"),
        ];
        for diag in &diags {
            recorder.emit(diag).unwrap();
        }
        recorder
    }

    #[test]
    fn records_in_order() {
        let recorder = recorded();
        let all = recorder.diagnostics();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].message, "unexpected token");
        assert_eq!(all[2].severity, Severity::Debug);
    }

    #[test]
    fn clones_share_storage() {
        let recorder = Recorder::new();
        let mut handle = recorder.clone();
        handle.emit(&Diagnostic::notice("shared")).unwrap();
        assert_eq!(recorder.diagnostics().len(), 1);
    }

    #[test]
    fn take_all_drains() {
        let recorder = recorded();
        assert_eq!(recorder.take_all().len(), 3);
        assert!(recorder.diagnostics().is_empty());
    }

    #[test]
    fn message_conditions() {
        let recorder = recorded();
        assert!(recorder.contains(&[Condition::HasMessage("unused import".into())]));
        assert_eq!(recorder.count(&[Condition::ContainsMessage("token".into())]), 2);
        assert!(!recorder.contains(&[Condition::HasMessage("unused".into())]));
    }

    #[test]
    fn severity_condition_accepts_any_listed() {
        let recorder = recorded();
        let cond = Condition::HasSeverity(vec![Severity::Error, Severity::Debug]);
        assert_eq!(recorder.count(&[cond]), 2);
    }

    #[test]
    fn conditions_combine_with_and() {
        let recorder = recorded();
        let matches = recorder.filter(&[
            Condition::ContainsMessage("token".into()),
            Condition::HasCode("E1".into()),
            Condition::HasFile(PathBuf::from("a.rs")),
            Condition::HasRange(Position::new(3, 4), Position::new(3, 8)),
        ]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].severity, Severity::Error);
    }

    #[test]
    fn title_conditions() {
        let recorder = recorded();
        assert!(recorder.contains(&[Condition::HasTitle("Unused".into())]));
        assert!(recorder.contains(&[Condition::ContainsTitle("Unu".into())]));
        assert_eq!(recorder.count(&[Condition::ContainsTitle(String::new())]), 1);
    }

    #[test]
    fn position_conditions() {
        let recorder = recorded();
        assert!(recorder.contains(&[Condition::HasStart(Position::new(3, 4))]));
        assert!(recorder.contains(&[Condition::HasEnd(Position::new(3, 8))]));
        assert_eq!(recorder.count(&[Condition::HasStart(Position::UNSET)]), 2);
    }

    #[test]
    fn empty_condition_list_matches_everything() {
        assert_eq!(recorded().count(&[]), 3);
    }

    #[test]
    fn thread_safety() {
        use std::thread;

        let recorder = Recorder::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let mut handle = recorder.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    handle.emit(&Diagnostic::error("e")).unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(recorder.count(&[]), 400);
    }
}
