//! Configuration management for caserun

mod loader;
mod settings;

pub use loader::ConfigLoader;
pub use settings::{
    CONFIG_FILE_NAME, Config, ConfigFile, DEFAULT_HARNESS_PROGRAM, HarnessFile, HarnessSettings,
};
