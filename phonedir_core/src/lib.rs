#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod directory;
pub mod error;
pub mod group;
pub mod query;

pub use auth::{
    AuthAction, AuthRequest, Authorizer, CredentialVerifier, PasswordChallenge, PlaintextSecret,
    Sha256Secret,
};
pub use directory::{Directory, NAME_PLACEHOLDER, PHONE_PLACEHOLDER};
pub use error::{Error, Result};
pub use group::Group;
pub use query::{MatchPolicy, SEARCH_PLACEHOLDER, SearchOutcome, filter_by_group, search};

/// Column names of the backing file, in field order.
pub const HEADER: [&str; 3] = ["name", "phone", "group"];

/// A single directory entry.
///
/// The store keeps `group` as free text; only the add path restricts it to
/// a [`Group`] label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub group: String,
}

impl Contact {
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            group: group.into(),
        }
    }

    /// Case-insensitive name comparison used for the uniqueness check.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Durable, ordered persistence of the contact list.
///
/// Implementations do not validate field content and do not deduplicate;
/// both are the caller's job.
pub trait ContactStore {
    /// Create the backing resource with only the header if it does not
    /// exist yet. Repeated calls leave an existing resource untouched.
    fn initialize(&self) -> Result<()>;

    /// Read every contact in file order.
    fn load_all(&self) -> Result<Vec<Contact>>;

    /// Write one contact to the end of the resource.
    fn append(&self, contact: &Contact) -> Result<()>;

    /// Rewrite the resource (header and all rows) from `contacts`.
    fn replace_all(&self, contacts: &[Contact]) -> Result<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn initialize(&self) -> Result<()> {
        (**self).initialize()
    }

    fn load_all(&self) -> Result<Vec<Contact>> {
        (**self).load_all()
    }

    fn append(&self, contact: &Contact) -> Result<()> {
        (**self).append(contact)
    }

    fn replace_all(&self, contacts: &[Contact]) -> Result<()> {
        (**self).replace_all(contacts)
    }
}
