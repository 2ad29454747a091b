//! Add and update entry points on top of a [`ContactStore`].
//!
//! Every check runs before anything is written; a rejected request leaves the
//! store untouched.

use tracing::{debug, info, warn};

use crate::auth::{AuthAction, AuthRequest, Authorizer};
use crate::error::{Error, Result};
use crate::group::Group;
use crate::query::{self, MatchPolicy, SearchOutcome};
use crate::{Contact, ContactStore};

/// Prompt text of the name input. Submitting it counts as empty.
pub const NAME_PLACEHOLDER: &str = "Name";
/// Prompt text of the phone input. Submitting it counts as empty.
pub const PHONE_PLACEHOLDER: &str = "Phone Number";

pub struct Directory<S> {
    store: S,
    policy: MatchPolicy,
}

impl<S: ContactStore> Directory<S> {
    /// Wrap `store` and make sure its backing resource exists.
    pub fn open(store: S) -> Result<Self> {
        store.initialize()?;
        Ok(Self {
            store,
            policy: MatchPolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn contacts(&self) -> Result<Vec<Contact>> {
        self.store.load_all()
    }

    /// Run [`query::search`] over `contacts` with this directory's policy.
    #[must_use]
    pub fn search<'a>(&self, contacts: &'a [Contact], text: &str) -> SearchOutcome<'a> {
        query::search(contacts, text, self.policy)
    }

    /// Add a new contact.
    ///
    /// `group` is `None` when the user has not picked one yet.
    pub fn add(
        &self,
        name: &str,
        phone: &str,
        group: Option<Group>,
        authorizer: &dyn Authorizer,
    ) -> Result<Contact> {
        let (name, phone) = validate(name, phone)?;

        let existing = self.store.load_all()?;
        if existing.iter().any(|c| c.has_name(name)) {
            debug!("Rejected duplicate name: {}", name);
            return Err(Error::DuplicateName(name.to_string()));
        }

        let group = group.ok_or(Error::GroupNotSelected)?;

        let request = AuthRequest {
            action: AuthAction::Add,
            contact_name: name,
        };
        if !authorizer.authorize(&request) {
            warn!("Authorization denied for {} of {}", request.action.as_str(), name);
            return Err(Error::AuthDenied);
        }

        let contact = Contact::new(name, phone, group.label());
        self.store.append(&contact)?;
        info!("Added contact {} ({})", contact.name, contact.group);
        Ok(contact)
    }

    /// Replace the name and phone of the contact named `selected`.
    ///
    /// The first contact whose name equals `selected` exactly is changed; its
    /// group is kept. Name uniqueness is not re-checked.
    pub fn update(
        &self,
        selected: Option<&str>,
        name: &str,
        phone: &str,
        authorizer: &dyn Authorizer,
    ) -> Result<Contact> {
        let request = AuthRequest {
            action: AuthAction::Update,
            contact_name: selected.unwrap_or_default(),
        };
        if !authorizer.authorize(&request) {
            warn!("Authorization denied for {} of {}", request.action.as_str(), request.contact_name);
            return Err(Error::AuthDenied);
        }

        let selected = selected.ok_or(Error::NoSelection)?;
        let (name, phone) = validate(name, phone)?;

        let mut contacts = self.store.load_all()?;
        let target = contacts
            .iter_mut()
            .find(|c| c.name == selected)
            .ok_or(Error::NoSelection)?;
        target.name = name.to_string();
        target.phone = phone.to_string();
        let updated = target.clone();

        self.store.replace_all(&contacts)?;
        info!("Updated contact {} -> {}", selected, updated.name);
        Ok(updated)
    }
}

/// Trim `name` and `phone` and reject empty or placeholder values.
pub fn validate<'a>(name: &'a str, phone: &'a str) -> Result<(&'a str, &'a str)> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() || name.eq_ignore_ascii_case(NAME_PLACEHOLDER) {
        return Err(Error::Validation("name is empty".to_string()));
    }
    if phone.is_empty() || phone.eq_ignore_ascii_case(PHONE_PLACEHOLDER) {
        return Err(Error::Validation("phone number is empty".to_string()));
    }
    Ok((name, phone))
}
