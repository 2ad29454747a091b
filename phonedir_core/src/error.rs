use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter both name and phone number ({0})")]
    Validation(String),

    #[error("This name already exists: {0}")]
    DuplicateName(String),

    #[error("Wrong password")]
    AuthDenied,

    #[error("Please select a contact to update")]
    NoSelection,

    #[error("Please select a group")]
    GroupNotSelected,

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("Cannot read contact store {}: {reason}", .path.display())]
    StoreRead { path: PathBuf, reason: String },

    #[error("Cannot write contact store {}: {reason}", .path.display())]
    StoreWrite { path: PathBuf, reason: String },
}

impl Error {
    pub fn store_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StoreRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn store_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StoreWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Short heading shown in front of a user-facing notice.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::GroupNotSelected | Self::UnknownGroup(_) => "Error",
            Self::DuplicateName(_) => "Duplicate",
            Self::AuthDenied => "Denied",
            Self::NoSelection => "Select",
            Self::StoreRead { .. } | Self::StoreWrite { .. } => "Store",
        }
    }

    /// Errors the user can fix by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::StoreRead { .. } | Self::StoreWrite { .. })
    }
}
