pub mod command;

pub use command::StatusCommand;
