//! caserun-core - bind an ordered set of test cases to a harness and run it
//!
//! This crate provides:
//! - Case identifiers and ordered case sets
//! - The two-operation harness contract (construct, run)
//! - The runner driver that ties them together without touching errors
//! - A harness backed by an external program, plus config file discovery
pub mod config;
pub mod driver;
pub mod error;
pub mod harness;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, HarnessError, Result};
pub use types::*;

// Re-export main API components
pub use config::{Config, ConfigLoader, HarnessSettings};
pub use driver::{Driver, run_cases};
pub use harness::{CommandHarness, CommandHarnessFactory, Harness, HarnessCommand, HarnessFactory};
