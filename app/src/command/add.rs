use phonedir_core::Group;

use super::Globals;
use crate::prompt;

#[derive(Debug, Clone)]
pub struct AddInput {
    pub globals: Globals,
    pub name: String,
    pub phone: String,
    /// Group label; `None` means no group was picked
    pub group: Option<String>,
    pub password: Option<String>,
}

/// Strategy for adding a contact.
///
/// An unknown group label is rejected before anything else. Name, phone and
/// duplicate checks run before the password is asked for, so a bad entry
/// never reaches the prompt.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = AddInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input.globals)?;
        let group = input.group.as_deref().map(Group::from_label).transpose()?;
        let authorizer = prompt::authorizer(&workspace.config.auth, input.password);

        let contact = workspace
            .directory
            .add(&input.name, &input.phone, group, &authorizer)?;
        println!("Contact added successfully: {} ({})", contact.name, contact.group);
        Ok(())
    }
}
