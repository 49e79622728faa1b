//! Structured diagnostic messages with severity, text, and optional location.

use crate::annotation::Annotation;
use crate::error::ValidationError;
use crate::position::Position;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single reportable message with a severity and optional source location.
///
/// Diagnostics are built with a severity-specific constructor, filled in with
/// [`Annotation`]s, and handed to a [`Reporter`](crate::Reporter). The JSON
/// form of this type is the JSON wire format: empty optional fields and unset
/// positions are omitted, and the start position is keyed `position`.
///
/// `start` and `end` are always present; an unknown location is represented by
/// [`Position::UNSET`] rather than an absent value, so annotations can set
/// lines and columns in any order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// A short identifier shown next to the severity (e.g. `error[E1234]`).
    #[serde(default, skip_serializing_if = "is_blank")]
    pub code: Option<String>,
    /// A short summary, shown instead of the message on the first line.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub title: Option<String>,
    /// The diagnostic text. Required.
    #[serde(default)]
    pub message: String,
    /// The file the diagnostic refers to.
    #[serde(default, skip_serializing_if = "is_blank_path")]
    pub file: Option<PathBuf>,
    /// The start of the referenced range.
    #[serde(rename = "position", default, skip_serializing_if = "Position::is_unset")]
    pub start: Position,
    /// The end of the referenced range. Only meaningful when `start` is set.
    #[serde(default, skip_serializing_if = "Position::is_unset")]
    pub end: Position,
}

impl Diagnostic {
    /// Creates a diagnostic with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            title: None,
            message: message.into(),
            file: None,
            start: Position::UNSET,
            end: Position::UNSET,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a notice diagnostic.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(Severity::Notice, message)
    }

    /// Creates a debug diagnostic.
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Severity::Debug, message)
    }

    /// Applies each annotation in order and returns the diagnostic.
    pub fn with(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        for annotation in annotations {
            annotation.apply(&mut self);
        }
        self
    }

    /// Applies a single annotation in place.
    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        annotation.apply(self);
        self
    }

    /// Checks the required fields.
    ///
    /// The severity is guaranteed valid by construction, so only the message is
    /// inspected here. File and position consistency are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Returns the code, if set and non-empty.
    pub fn code_str(&self) -> Option<&str> {
        self.code.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the title, if set and non-empty.
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the file path, if set and non-empty.
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_blank_path(value: &Option<PathBuf>) -> bool {
    value.as_deref().map_or(true, |p| p.as_os_str().is_empty())
}
