use super::Globals;
use crate::output;

/// Strategy for the full listing, in file order.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = Globals;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input)?;
        let contacts = workspace.directory.contacts()?;
        let rows: Vec<_> = contacts.iter().collect();
        output::print_contacts(&rows, input.json)
    }
}
