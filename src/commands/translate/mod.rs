pub mod command;

pub use command::TranslateCommand;
