use phonedir_config::Config;

use super::Globals;

/// Strategy for first-time setup.
///
/// Writes the config template (unless one exists) and creates the contact
/// file with only its header.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Globals;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config(input.config.as_deref())?;
        println!("✅ Created config file at: {}", config_path.display());

        let workspace = super::open_workspace(&input)?;
        println!(
            "📇 Contact file ready at: {}",
            workspace.directory.store().path().display()
        );
        println!();
        println!("📝 Next steps:");
        println!("   1. Run 'phonedir passwd' to replace the default password");
        println!("   2. Run 'phonedir groups' to see the group labels");
        println!("   3. Run 'phonedir add -n <name> -p <phone> -g <group>'");
        Ok(())
    }
}
