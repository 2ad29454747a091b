//! The closed set of department groups a contact can be filed under.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Management,
    HrAdmin,
    BoeIt,
    Desk,
    Production,
    EditPanel,
    AccountsMarketing,
    Transport,
    BureauOffice,
    Fm,
}

impl Group {
    pub const ALL: [Self; 10] = [
        Self::Management,
        Self::HrAdmin,
        Self::BoeIt,
        Self::Desk,
        Self::Production,
        Self::EditPanel,
        Self::AccountsMarketing,
        Self::Transport,
        Self::BureauOffice,
        Self::Fm,
    ];

    /// The label written to the `group` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Management => "Management",
            Self::HrAdmin => "HR & Admin",
            Self::BoeIt => "BOE & IT",
            Self::Desk => "Desk",
            Self::Production => "Production",
            Self::EditPanel => "Edit Panel",
            Self::AccountsMarketing => "Accounts_Marketing",
            Self::Transport => "Transport",
            Self::BureauOffice => "Bureau Office",
            Self::Fm => "Fm",
        }
    }

    /// Keyword handed to [`crate::filter_by_group`] by the group shortcuts.
    #[must_use]
    pub const fn filter_keyword(self) -> &'static str {
        match self {
            Self::AccountsMarketing => "Accounts",
            other => other.label(),
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Result<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownGroup(wanted.to_string()))
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Group {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}
