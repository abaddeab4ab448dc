use anyhow::{Context, Result};
use caserun_core::{
    CaseSet, CommandHarnessFactory, Config, ConfigLoader, Driver, HarnessError, HarnessFactory,
};
use tracing::{debug, error};

use crate::cli::GlobalOptions;
use crate::display::print_command_breakdown;

/// Resolve the configuration and case set for this invocation.
///
/// `--case` flags replace whatever the configuration names.
pub fn resolve_config(options: &GlobalOptions) -> Result<Config> {
    let config = match options.config {
        Some(ref path) => {
            debug!("Loading config from: {}", path.display());
            ConfigLoader::load_file(path)?
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            ConfigLoader::from_env().discover(&cwd)?
        }
    };

    if options.cases.is_empty() {
        return Ok(config);
    }

    let cases = CaseSet::parse(options.cases.iter().cloned())?;
    debug!("Case set overridden from the command line: {:?}", cases.to_strings());
    Ok(config.with_cases(cases))
}

pub fn run_command(options: &GlobalOptions, dry_run: bool) -> Result<()> {
    let config = resolve_config(options)?;
    let factory = CommandHarnessFactory::new(config.harness);

    if dry_run {
        let harness = factory.construct(config.cases)?;
        println!("{}", harness.command().to_shell_command());
        print_command_breakdown(harness.command(), harness.cases());
        return Ok(());
    }

    match Driver::new(config.cases).drive(&factory) {
        Ok(_) => Ok(()),
        Err(e @ HarnessError::Failed { .. }) => {
            error!("{}", e);
            std::process::exit(e.exit_code().unwrap_or(1));
        }
        Err(e) => Err(e.into()),
    }
}
