//! Harness contract and the process-backed implementation

pub mod command;
pub mod process;
pub mod traits;

pub use command::HarnessCommand;
pub use process::{CommandHarness, CommandHarnessFactory};
pub use traits::{Harness, HarnessFactory};
