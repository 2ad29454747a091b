use phonedir_core::{Group, filter_by_group};

use super::Globals;
use crate::output;

#[derive(Debug, Clone)]
pub struct GroupInput {
    pub globals: Globals,
    pub keyword: String,
}

/// Strategy for the group shortcuts.
///
/// A keyword naming a group exactly is replaced by that group's filter
/// keyword, so `Accounts_Marketing` behaves like its shortcut.
#[derive(Debug, Clone, Copy)]
pub struct GroupStrategy;

impl super::CommandStrategy for GroupStrategy {
    type Input = GroupInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let workspace = super::open_workspace(&input.globals)?;
        let contacts = workspace.directory.contacts()?;
        let rows = filter_by_group(&contacts, resolve_keyword(&input.keyword));
        output::print_contacts(&rows, input.globals.json)
    }
}

/// Shortcut keyword for a full group label; anything else is used as given.
fn resolve_keyword(keyword: &str) -> &str {
    Group::from_label(keyword).map_or(keyword, |group| group.filter_keyword())
}

/// Strategy listing every group label with its shortcut keyword.
#[derive(Debug, Clone, Copy)]
pub struct GroupsStrategy;

impl super::CommandStrategy for GroupsStrategy {
    type Input = Globals;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.json {
            let labels: Vec<&str> = Group::ALL.iter().map(|g| g.label()).collect();
            println!("{}", serde_json::to_string_pretty(&labels)?);
            return Ok(());
        }
        for group in Group::ALL {
            if group.filter_keyword() == group.label() {
                println!("{group}");
            } else {
                println!("{group}  (shortcut: {})", group.filter_keyword());
            }
        }
        Ok(())
    }
}
