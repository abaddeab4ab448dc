use anyhow::{Context, Result};
use caserun_core::Config;
use caserun_core::config::CONFIG_FILE_NAME;
use std::{env, fs, path::Path};
use tracing::info;

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let project_root = project_root
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", project_root.display()))?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let content = Config::default().to_json_pretty()?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit \"cases\" to choose what runs and \"harness\" to choose what runs it.");

    Ok(())
}
