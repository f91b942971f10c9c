//! Non-fatal import findings
//!
//! An import keeps going past everything the host cannot represent; each
//! skipped or degraded piece is recorded here and surfaced in the final
//! report.

use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// A piece was skipped by design; nothing to fix.
    Info,
    /// The imported request may not behave as the description intended.
    Warning,
    /// Part of the context could not be imported at all.
    Error,
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One non-fatal finding, tied to the place in the tree that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportWarning {
    /// Where the finding occurred (e.g. `Get User/auth`).
    pub location: String,
    /// What happened.
    pub message: String,
    /// Severity.
    pub severity: WarningSeverity,
}

impl ImportWarning {
    /// Records an info-level finding.
    pub fn info(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            severity: WarningSeverity::Info,
        }
    }

    /// Records a warning-level finding.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            severity: WarningSeverity::Warning,
        }
    }

    /// Records an error-level finding.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            severity: WarningSeverity::Error,
        }
    }

    /// True for error-severity findings.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, WarningSeverity::Error)
    }
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.location, self.message)
    }
}

/// Severity counts over a list of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningStats {
    /// Info-level findings.
    pub info: usize,
    /// Warning-level findings.
    pub warnings: usize,
    /// Error-level findings.
    pub errors: usize,
}

impl WarningStats {
    /// Tallies a list of findings.
    #[must_use]
    pub fn from_warnings(warnings: &[ImportWarning]) -> Self {
        warnings.iter().fold(Self::default(), |mut stats, warning| {
            match warning.severity {
                WarningSeverity::Info => stats.info += 1,
                WarningSeverity::Warning => stats.warnings += 1,
                WarningSeverity::Error => stats.errors += 1,
            }
            stats
        })
    }

    /// Total findings of any severity.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info + self.warnings + self.errors
    }

    /// True when any error-severity finding was recorded.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
