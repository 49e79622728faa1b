//! Error types for diagnostic validation and emission.

use std::io;

/// A diagnostic failed validation before being reported.
///
/// Validation errors are raised before any metrics are counted or any output
/// is written, so the caller can fix the diagnostic and report it again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The severity was empty.
    #[error("diagnostic: required field 'severity' is missing")]
    MissingSeverity,

    /// The severity named none of the known levels.
    #[error("severity: unknown value '{0}'")]
    UnknownSeverity(String),

    /// The message was empty.
    #[error("diagnostic: required field 'message' is missing")]
    MissingMessage,
}

/// An emitter could not write a diagnostic to its sink.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The underlying writer rejected the output.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The diagnostic could not be encoded as JSON.
    #[error("failed to encode diagnostic: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by [`Reporter::report`](crate::Reporter::report).
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The diagnostic was rejected before any side effect.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The emitter failed while writing the diagnostic.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation_errors() {
        assert_eq!(
            ValidationError::MissingSeverity.to_string(),
            "diagnostic: required field 'severity' is missing"
        );
        assert_eq!(
            ValidationError::MissingMessage.to_string(),
            "diagnostic: required field 'message' is missing"
        );
        assert_eq!(
            ValidationError::UnknownSeverity("fatal".to_string()).to_string(),
            "severity: unknown value 'fatal'"
        );
    }

    #[test]
    fn io_errors_pass_through_verbatim() {
        let err: EmitError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.to_string(), "pipe closed");
        let err: ReportError = err.into();
        assert_eq!(err.to_string(), "pipe closed");
    }

    #[test]
    fn report_error_wraps_validation() {
        let err: ReportError = ValidationError::MissingMessage.into();
        assert!(matches!(
            err,
            ReportError::Invalid(ValidationError::MissingMessage)
        ));
    }
}
