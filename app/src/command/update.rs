use super::Globals;
use crate::prompt;

#[derive(Debug, Clone)]
pub struct UpdateInput {
    pub globals: Globals,
    /// Exact current name of the contact to change
    pub select: Option<String>,
    pub name: String,
    pub phone: String,
    pub password: Option<String>,
}

/// Strategy for changing a contact's name and phone number.
#[derive(Debug, Clone, Copy)]
pub struct UpdateStrategy;

impl super::CommandStrategy for UpdateStrategy {
    type Input = UpdateInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input.globals)?;
        let authorizer = prompt::authorizer(&workspace.config.auth, input.password);

        let contact = workspace.directory.update(
            input.select.as_deref(),
            &input.name,
            &input.phone,
            &authorizer,
        )?;
        println!("Contact updated successfully: {} {}", contact.name, contact.phone);
        Ok(())
    }
}
