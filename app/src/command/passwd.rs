use phonedir_config::Config;
use phonedir_core::{CredentialVerifier, Sha256Secret};
use tracing::info;

use super::Globals;
use crate::prompt::read_secret;

/// Strategy for replacing the shared password.
///
/// Asks for the current password, then the new one twice, and stores only
/// the new digest in the config file.
#[derive(Debug, Clone, Copy)]
pub struct PasswdStrategy;

impl super::CommandStrategy for PasswdStrategy {
    type Input = Globals;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = match input.config {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let mut config = Config::load_or_default(Some(&config_path))?;

        let current = read_secret("Current password: ")?.unwrap_or_default();
        if !Sha256Secret::from_hex(&config.auth.password_sha256).verify(&current) {
            return Err(phonedir_core::Error::AuthDenied.into());
        }

        let new = read_secret("New password: ")?.unwrap_or_default();
        if new.is_empty() {
            anyhow::bail!("New password must not be empty");
        }
        let again = read_secret("Repeat new password: ")?.unwrap_or_default();
        if new != again {
            anyhow::bail!("Passwords do not match");
        }

        config.set_password(&new);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        config.save_to(&config_path)?;
        info!("Password digest saved to {}", config_path.display());
        println!("Password changed.");
        Ok(())
    }
}
