/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Mutations supported by the student service.
/// Used for logging and for the user-facing failure notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Generic notice shown when a storage error aborts the operation
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => "An error occurred while adding the student. Please try again.",
            Operation::Update => "An error occurred while updating the student. Please try again.",
            Operation::Delete => "An error occurred while deleting the student. Please try again.",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
