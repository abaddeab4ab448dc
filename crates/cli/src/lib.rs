//! caserun command-line front end
//!
//! Nothing in this library runs cases on its own; `main.rs` is the only
//! caller of [`Runner::execute`].
pub mod cli;
pub mod commands;
pub mod display;

// Re-export commonly used items
pub use cli::{Commands, GlobalOptions, Runner};
