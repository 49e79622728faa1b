//! Diagnostic severity levels.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity level of a diagnostic message.
///
/// The textual form is the lowercase variant name, used both for display and
/// on the JSON and GitHub wire formats. Parsing rejects the empty string and
/// any name outside this closed set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    /// A definite problem.
    Error,
    /// A potential issue that should be reviewed.
    Warning,
    /// Informational output.
    Notice,
    /// Diagnostic chatter only shown when debug output is enabled.
    Debug,
}

impl Severity {
    /// All severities, from most to least severe.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Debug,
    ];

    /// Returns the lowercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ValidationError::MissingSeverity),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "debug" => Ok(Severity::Debug),
            other => Err(ValidationError::UnknownSeverity(other.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, ValidationError> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Notice), "notice");
        assert_eq!(format!("{}", Severity::Debug), "debug");
    }

    #[test]
    fn parse_known_names() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<Severity>(), Err(ValidationError::MissingSeverity));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "fatal".parse::<Severity>(),
            Err(ValidationError::UnknownSeverity("fatal".to_string()))
        );
        // Names are case-sensitive.
        assert!("Error".parse::<Severity>().is_err());
    }

    #[test]
    fn try_from_owned_string() {
        assert_eq!(Severity::try_from("error".to_string()), Ok(Severity::Error));
        assert_eq!(
            Severity::try_from(String::new()),
            Err(ValidationError::MissingSeverity)
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: Severity = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(back, Severity::Notice);
    }

    #[test]
    fn serde_rejects_unknown() {
        let err = serde_json::from_str::<Severity>("\"loud\"").unwrap_err();
        assert!(err.to_string().contains("unknown value 'loud'"));
        assert!(serde_json::from_str::<Severity>("\"\"").is_err());
    }
}
