//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod event;
pub mod list;

pub use event::EventCommandHandler;
pub use list::ListCommandHandler;
pub use test::TestCommandHandler;
