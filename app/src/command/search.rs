use tracing::debug;

use super::Globals;
use crate::output;

#[derive(Debug, Clone)]
pub struct SearchInput {
    pub globals: Globals,
    /// Query words joined by single spaces
    pub query: String,
}

/// Strategy for keyword search.
///
/// An empty query prints the full listing; a query matching nothing prints
/// the "No contacts found" row.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input.globals)?;
        let contacts = workspace.directory.contacts()?;
        let outcome = workspace.directory.search(&contacts, &input.query);
        debug!(
            "Search {:?} ({:?}): {} matches",
            input.query,
            workspace.directory.policy(),
            outcome.contacts().len()
        );
        output::print_search(&outcome, input.globals.json)
    }
}
