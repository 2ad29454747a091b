#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;
mod output;
mod prompt;

use command::{
    AddInput, AddStrategy, CommandStrategy, Globals, GroupInput, GroupStrategy, GroupsStrategy,
    InfoStrategy, InitStrategy, ListStrategy, PasswdStrategy, SearchInput, SearchStrategy,
    UpdateInput, UpdateStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "phonedir")]
#[command(about = "Office phone directory", long_about = None)]
struct Cli {
    /// Config file (default: ~/phonedir/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Contact file, overriding the config
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Print contacts as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config template and an empty contact file
    Init,
    /// Show every contact
    List,
    /// Search by name, number or group
    Search {
        /// Search words; any of them may match
        query: Vec<String>,
    },
    /// Show contacts of one group
    Group {
        /// Group label or part of it, e.g. "Accounts"
        keyword: String,
    },
    /// List the available groups
    Groups,
    /// Add a contact
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        phone: String,
        /// One of the labels printed by `groups`
        #[arg(short, long)]
        group: Option<String>,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Change the name and number of a contact
    Update {
        /// Current name of the contact (exact)
        #[arg(short, long)]
        select: Option<String>,
        /// New name
        #[arg(short, long)]
        name: String,
        /// New phone number
        #[arg(short, long)]
        phone: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Set a new shared password
    Passwd,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let globals = Globals {
        config: cli.config,
        store: cli.store,
        json: cli.json,
    };

    match cli.command {
        Commands::Init => InitStrategy.execute(globals),
        Commands::List => ListStrategy.execute(globals),
        Commands::Search { query } => SearchStrategy.execute(SearchInput {
            globals,
            query: query.join(" "),
        }),
        Commands::Group { keyword } => GroupStrategy.execute(GroupInput { globals, keyword }),
        Commands::Groups => GroupsStrategy.execute(globals),
        Commands::Add {
            name,
            phone,
            group,
            password,
        } => AddStrategy.execute(AddInput {
            globals,
            name,
            phone,
            group,
            password,
        }),
        Commands::Update {
            select,
            name,
            phone,
            password,
        } => UpdateStrategy.execute(UpdateInput {
            globals,
            select,
            name,
            phone,
            password,
        }),
        Commands::Passwd => PasswdStrategy.execute(globals),
        Commands::Info => InfoStrategy.execute(globals),
        Commands::Version => VersionStrategy.execute(()),
    }
}

/// Print a failed command as a one-line notice. Directory errors keep their
/// category heading; anything else is shown with its cause chain.
fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(dir_err) = err.downcast_ref::<phonedir_core::Error>() {
        eprintln!("{}: {dir_err}", dir_err.title());
        if dir_err.is_user_error() {
            return ExitCode::from(1);
        }
        return ExitCode::from(2);
    }
    eprintln!("Error: {err:#}");
    ExitCode::from(2)
}
