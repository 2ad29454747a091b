//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input type, so the
//! dispatcher in `main` stays a plain `match` with no boxing.

use std::path::PathBuf;

use phonedir_config::Config;
use phonedir_core::Directory;
use phonedir_store::CsvContactStore;
use tracing::debug;

mod add;
mod group;
mod info;
mod init;
mod list;
mod passwd;
mod search;
mod update;
mod version;

pub use add::{AddInput, AddStrategy};
pub use group::{GroupInput, GroupStrategy, GroupsStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::ListStrategy;
pub use passwd::PasswdStrategy;
pub use search::{SearchInput, SearchStrategy};
pub use update::{UpdateInput, UpdateStrategy};
pub use version::VersionStrategy;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub config: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub json: bool,
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Loaded configuration plus a directory opened on the resolved store.
struct Workspace {
    config: Config,
    directory: Directory<CsvContactStore>,
}

fn open_workspace(globals: &Globals) -> anyhow::Result<Workspace> {
    let config = Config::load_or_default(globals.config.as_deref())?;

    let store_path = match &globals.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    debug!("Contact store: {}", store_path.display());

    let directory =
        Directory::open(CsvContactStore::new(store_path))?.with_policy(config.search.policy);
    Ok(Workspace { config, directory })
}
