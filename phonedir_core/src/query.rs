//! Keyword search and group filtering over an in-memory contact list.
//!
//! Both operations are pure: they take the full contact set as an argument
//! and return borrowed contacts in their original order.

use serde::{Deserialize, Serialize};

use crate::Contact;

/// Prompt text of the search box. A query equal to it counts as empty.
pub const SEARCH_PLACEHOLDER: &str = "search by name or number";

/// How prefix and substring matches are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Prefix matches win outright; substring matches are only used when
    /// no contact matches by prefix.
    #[default]
    PrefixFirst,
    /// Prefix matches first, then the remaining substring matches.
    RankedUnion,
}

/// Result of [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Matches(Vec<&'a Contact>),
    /// The query matched nothing. Rendered as a placeholder row, never as
    /// an empty list.
    NoResults,
}

impl<'a> SearchOutcome<'a> {
    #[must_use]
    pub const fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Matched contacts; empty for [`SearchOutcome::NoResults`].
    #[must_use]
    pub fn contacts(&self) -> &[&'a Contact] {
        match self {
            Self::Matches(found) => found,
            Self::NoResults => &[],
        }
    }
}

/// Lowercased search fields of one contact. Phone numbers are compared as
/// stored.
struct Fields<'a> {
    name: String,
    phone: &'a str,
    group: String,
}

impl<'a> Fields<'a> {
    fn of(contact: &'a Contact) -> Self {
        Self {
            name: contact.name.to_lowercase(),
            phone: &contact.phone,
            group: contact.group.to_lowercase(),
        }
    }

    fn any(&self, tokens: &[&str], test: impl Fn(&str, &str) -> bool) -> bool {
        tokens.iter().any(|token| {
            test(&self.name, token) || test(self.phone, token) || test(&self.group, token)
        })
    }

    fn prefix_match(&self, tokens: &[&str]) -> bool {
        self.any(tokens, |field, token| field.starts_with(token))
    }

    fn substring_match(&self, tokens: &[&str]) -> bool {
        self.any(tokens, |field, token| field.contains(token))
    }
}

/// Search `contacts` for `query`.
///
/// The query is trimmed and lowercased, then split on whitespace; a contact
/// matches when any token is a prefix (or, failing that, a substring) of its
/// lowercased name, its phone, or its lowercased group. An empty query
/// returns every contact.
#[must_use]
pub fn search<'a>(contacts: &'a [Contact], query: &str, policy: MatchPolicy) -> SearchOutcome<'a> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || query == SEARCH_PLACEHOLDER || contacts.is_empty() {
        return SearchOutcome::Matches(contacts.iter().collect());
    }

    let tokens: Vec<&str> = query.split_whitespace().collect();
    let fields: Vec<Fields<'a>> = contacts.iter().map(Fields::of).collect();

    let prefixed: Vec<bool> = fields.iter().map(|f| f.prefix_match(&tokens)).collect();
    let mut found: Vec<&'a Contact> = contacts
        .iter()
        .zip(&prefixed)
        .filter_map(|(contact, hit)| hit.then_some(contact))
        .collect();

    if found.is_empty() || policy == MatchPolicy::RankedUnion {
        for (i, contact) in contacts.iter().enumerate() {
            if !prefixed[i] && fields[i].substring_match(&tokens) {
                found.push(contact);
            }
        }
    }

    if found.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(found)
    }
}

/// Every contact whose group contains `keyword`, ignoring case.
#[must_use]
pub fn filter_by_group<'a>(contacts: &'a [Contact], keyword: &str) -> Vec<&'a Contact> {
    let keyword = keyword.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.group.to_lowercase().contains(&keyword))
        .collect()
}
