// =====================================================
// FILE: commands/mod.rs
// =====================================================

pub mod command;
pub mod exit;
pub mod handler;
pub mod lang;
pub mod registry;
pub mod status;
pub mod translate;

pub use command::{Command, CommandOutput};
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
