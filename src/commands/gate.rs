//! Password challenge/response around protected files.
//!
//! A command that needs a secret does not block. It hands back a [`Challenge`]
//! and the caller resumes the operation later by answering it.

use snafu::ensure;
use tracing::warn;

use crate::commands::{CancelledSnafu, Command, CommandError};
use crate::filesystem::{Location, Protection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    /// `cat` on a protected file
    Read,
    /// `protect` asking for the new password
    Protect,
    /// `unprotect` asking for the current password
    Unprotect,
}

impl ChallengeKind {
    pub fn command(self) -> Command {
        match self {
            ChallengeKind::Read => Command::Cat,
            ChallengeKind::Protect => Command::Protect,
            ChallengeKind::Unprotect => Command::Unprotect,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            ChallengeKind::Read => "This file is password protected. Enter password:",
            ChallengeKind::Protect => "Enter a password to protect the file:",
            ChallengeKind::Unprotect => "Enter the current password:",
        }
    }
}

/// A suspended operation waiting for a secret.
///
/// It remembers the resolved location of the file, not a reference into the
/// tree, so the node is looked up again when the answer arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    kind: ChallengeKind,
    target: Location,
    path: String,
}

impl Challenge {
    pub(crate) fn new(kind: ChallengeKind, target: Location, path: impl Into<String>) -> Self {
        Self {
            kind,
            target,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    pub fn prompt(&self) -> &'static str {
        self.kind.prompt()
    }

    pub fn target(&self) -> &Location {
        &self.target
    }

    /// The path as the user typed it.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Lets a secret through to an existing protection. Empty and wrong answers
/// are the same failure.
pub(crate) fn admit(protection: Option<&Protection>, secret: &str) -> Result<(), CommandError> {
    match protection {
        None => Ok(()),
        Some(protection) if protection.admits(secret) => Ok(()),
        Some(_) => {
            warn!("Rejected password attempt");
            Err(CommandError::IncorrectPassword)
        }
    }
}

/// Turns the answer to a protect challenge into a new protection.
pub(crate) fn seal(secret: &str) -> Result<Protection, CommandError> {
    ensure!(!secret.is_empty(), CancelledSnafu);
    Ok(Protection::new(secret))
}
