use phonedir_core::ContactStore;

use super::Globals;

/// Strategy for displaying the resolved configuration.
///
/// Shows where contacts are stored, whether the file can be read, the search
/// policy, and how the password is supplied. The password digest itself is
/// never printed.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Globals;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input)?;
        let store = workspace.directory.store();

        println!("=== phonedir Configuration ===\n");

        println!("Store:");
        println!("  Path: {}", store.path().display());
        match store.load_all() {
            Ok(contacts) => println!("  Status: OK ({} contacts)", contacts.len()),
            Err(e) => {
                println!("  Status: Unreadable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Search:");
        println!("  Policy: {:?}", workspace.directory.policy());
        println!();

        println!("Auth:");
        let auth = &workspace.config.auth;
        if auth.uses_legacy_password() {
            println!("  Password: default (change it with 'phonedir passwd')");
        } else {
            println!("  Password: custom");
        }
        match &auth.password_env {
            Some(var) => println!("  Password Env: {var}"),
            None => println!("  Password Env: (not set)"),
        }

        Ok(())
    }
}
