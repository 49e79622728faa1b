//! Per-reporter diagnostic counters.

use crate::severity::Severity;

/// Counts of diagnostics reported, by severity.
///
/// Every valid diagnostic passed to a [`Reporter`](crate::Reporter) is
/// counted, including debug diagnostics that were suppressed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Metrics {
    /// The number of error diagnostics.
    pub errors: usize,
    /// The number of warning diagnostics.
    pub warnings: usize,
    /// The number of notice diagnostics.
    pub notices: usize,
    /// The number of debug diagnostics.
    pub debugs: usize,
}

impl Metrics {
    /// Increments the counter matching `severity`.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Notice => self.notices += 1,
            Severity::Debug => self.debugs += 1,
        }
    }

    /// Returns the counter matching `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
            Severity::Notice => self.notices,
            Severity::Debug => self.debugs,
        }
    }

    /// Returns the number of diagnostics counted across all severities.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.notices + self.debugs
    }

    /// Returns `true` if any error diagnostic was counted.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metrics() {
        let m = Metrics::default();
        assert_eq!(m.total(), 0);
        assert!(!m.has_errors());
    }

    #[test]
    fn record_touches_one_counter() {
        for severity in Severity::ALL {
            let mut m = Metrics::default();
            m.record(severity);
            assert_eq!(m.count(severity), 1);
            assert_eq!(m.total(), 1);
        }
    }

    #[test]
    fn has_errors_only_for_errors() {
        let mut m = Metrics::default();
        m.record(Severity::Warning);
        m.record(Severity::Debug);
        assert!(!m.has_errors());
        m.record(Severity::Error);
        assert!(m.has_errors());
        assert_eq!(m.total(), 3);
    }
}
