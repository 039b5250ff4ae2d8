//! Validation failures reported by create guards.

use serde::Serialize;
use thiserror::Error;

use idconsole_core::DomainError;

use crate::foundations::FieldKind;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent.
    Missing,
    /// The field is present with the wrong JSON type.
    TypeMismatch {
        expected: FieldKind,
        found: &'static str,
    },
    /// The key is not declared by the entity and unknown keys are rejected.
    Unrecognized,
    /// The normalized value could not be decoded into the input type.
    Malformed { reason: String },
}

impl core::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IssueKind::Missing => f.write_str("required"),
            IssueKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            IssueKind::Unrecognized => f.write_str("unrecognized key"),
            IssueKind::Malformed { reason } => write!(f, "malformed: {reason}"),
        }
    }
}

/// A rejected field, addressed by its logical name (`""` is the input itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl core::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_root() {
            write!(f, "<root>: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Every issue found in one candidate, in field declaration order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid {entity} input: {}", render_issues(.issues))]
pub struct ValidationError {
    pub entity: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.path.as_str())
    }

    pub fn issue_for(&self, path: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.path == path)
    }
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for DomainError {
    fn from(value: ValidationError) -> Self {
        DomainError::validation(value.to_string())
    }
}
