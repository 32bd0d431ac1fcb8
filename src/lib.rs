#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod commands;
pub mod core;
pub mod i18n;
pub mod setup;
pub mod store;

// Essential re-exports
pub use commands::{Command, CommandHandler, CommandOutput, CommandRegistry, CommandResult};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{LanguageCode, TranslationTable};
pub use store::{
    LanguageBackend, LanguageState, LanguageStore, MemoryBackend, TomlBackend, TransitionPhase,
    TransitionTiming,
};

pub fn create_default_registry() -> CommandRegistry {
    use commands::{
        exit::ExitCommand, lang::LanguageCommand, status::StatusCommand,
        translate::TranslateCommand,
    };

    let mut registry = CommandRegistry::new();

    registry.register(LanguageCommand);
    registry.register(TranslateCommand);
    registry.register(StatusCommand);
    registry.register(ExitCommand);

    registry
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}

/// Builds the store for `config` and wraps it in the default command set.
pub async fn create_handler(config: &Config) -> Result<CommandHandler> {
    let store = LanguageStore::from_config(config).await?;
    Ok(CommandHandler::new(store))
}
