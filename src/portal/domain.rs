// Domain types - pure, no database or HTTP concerns
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::db::models::Student;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    #[error("Student ID is required")]
    MissingStudentId,

    #[error("ids must be an array")]
    IdsNotArray,

    /// Covers both "no such student" and "portal disabled".
    #[error("Student not found or parents portal access is disabled")]
    NotEligible,
}

/// A trimmed, non-empty student identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    pub fn parse(raw: &str) -> Result<Self, PortalError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PortalError::MissingStudentId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Accepts only a JSON string; anything else counts as missing.
    pub fn from_json(value: Option<&Value>) -> Result<Self, PortalError> {
        match value {
            Some(Value::String(s)) => Self::parse(s),
            _ => Err(PortalError::MissingStudentId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered, de-duplicated list of ids a browser has linked.
///
/// The browser keeps this list in local storage as a JSON array of strings;
/// the server never stores it and only uses this type to normalise lists it
/// receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkedChildren(Vec<StudentId>);

impl LinkedChildren {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unless already present. Returns whether the list changed.
    pub fn link(&mut self, id: StudentId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.0.iter().any(|linked| linked == id)
    }

    pub fn ids(&self) -> &[StudentId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of an id in link order, for sorting fetched rows.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|linked| linked.as_str() == id)
    }

    /// Builds the list from an `ids` JSON value. Non-array input is an error;
    /// blank and non-string entries are skipped. Any length is accepted.
    pub fn from_json(value: Option<&Value>) -> Result<Self, PortalError> {
        let Some(Value::Array(entries)) = value else {
            return Err(PortalError::IdsNotArray);
        };

        let mut linked = Self::new();
        for entry in entries {
            if let Some(id) = entry.as_str().and_then(|s| StudentId::parse(s).ok()) {
                linked.link(id);
            }
        }

        Ok(linked)
    }
}

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedStudent {
    pub id: String,
    pub full_name: String,
    pub has_parents_portal: bool,
}

/// The single access rule: the student must exist and have the flag set.
/// Both failure cases collapse into `NotEligible`.
pub fn check_access(student: Option<Student>) -> Result<Student, PortalError> {
    match student {
        Some(student) if student.parents_portal => Ok(student),
        _ => Err(PortalError::NotEligible),
    }
}

impl From<&Student> for VerifiedStudent {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            full_name: student.full_name(),
            has_parents_portal: student.parents_portal,
        }
    }
}
