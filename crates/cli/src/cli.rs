use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{init_command, list_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "caserun")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    PROJECT_ROOT      Stop config discovery at this directory")]
pub struct Runner {
    /// Read configuration from this file instead of discovering .caserun.json
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Case identifier to run; repeat to run several, in the order given
    #[arg(long = "case", global = true, value_name = "ID")]
    pub cases: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Construct the harness for the case set and run it once
    #[command(visible_alias = "r")]
    Run {
        /// Print the harness command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Print the resolved case set, one identifier per line
    #[command(visible_alias = "ls")]
    List,
    /// Write a .caserun.json holding the built-in case set
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Runner {
    /// Execute the selected command; no subcommand means `run`
    pub fn execute(self) -> Result<()> {
        let options = GlobalOptions {
            config: self.config,
            cases: self.cases,
        };

        match self.command.unwrap_or(Commands::Run { dry_run: false }) {
            Commands::Run { dry_run } => run_command(&options, dry_run),
            Commands::List => list_command(&options),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub cases: Vec<String>,
}
