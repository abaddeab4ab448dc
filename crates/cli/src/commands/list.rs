use anyhow::Result;

use super::resolve_config;
use crate::cli::GlobalOptions;

pub fn list_command(options: &GlobalOptions) -> Result<()> {
    let config = resolve_config(options)?;
    for case in &config.cases {
        println!("{case}");
    }
    Ok(())
}
