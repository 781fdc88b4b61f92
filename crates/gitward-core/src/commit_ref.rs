//! Validated reference to a single commit in a hosted repository.

use std::fmt;

use thiserror::Error;

/// Error returned when a commit reference fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// An (owner, repository, commit id) triple naming exactly one commit.
///
/// All three fields are guaranteed non-empty. The commit id may be a full
/// or abbreviated hash; it is passed through to the hosting API verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    owner: String,
    repo: String,
    commit: String,
}

impl CommitRef {
    /// Create a new `CommitRef`, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] naming the first empty field.
    pub fn new(owner: &str, repo: &str, commit: &str) -> Result<Self, ValidationError> {
        if owner.is_empty() {
            return Err(ValidationError::Empty("owner"));
        }
        if repo.is_empty() {
            return Err(ValidationError::Empty("repo"));
        }
        if commit.is_empty() {
            return Err(ValidationError::Empty("commit"));
        }
        Ok(Self {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            commit: commit.to_owned(),
        })
    }

    /// Repository owner (user or organisation slug).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Commit identifier.
    #[must_use]
    pub fn commit(&self) -> &str {
        &self.commit
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.commit)
    }
}
