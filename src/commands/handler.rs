// =====================================================
// FILE: src/commands/handler.rs
// =====================================================

use super::command::CommandOutput;
use super::registry::CommandRegistry;
use crate::store::LanguageStore;

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
            should_exit: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
    store: LanguageStore,
}

impl CommandHandler {
    pub fn new(store: LanguageStore) -> Self {
        Self::with_registry(crate::create_default_registry(), store)
    }

    pub fn with_registry(registry: CommandRegistry, store: LanguageStore) -> Self {
        Self { registry, store }
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    pub async fn handle_input(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some((&name, args)) = parts.split_first() else {
            return CommandResult::failed(String::new());
        };

        log::debug!("CommandHandler processing: '{}'", input);

        if name.eq_ignore_ascii_case("help") {
            return CommandResult {
                message: self.help_text(),
                success: true,
                should_exit: false,
            };
        }

        match self.registry.execute(&self.store, name, args).await {
            Some(Ok(CommandOutput::Message(message))) => CommandResult {
                message,
                success: true,
                should_exit: false,
            },
            Some(Ok(CommandOutput::Exit(message))) => CommandResult {
                message,
                success: true,
                should_exit: true,
            },
            Some(Err(e)) => {
                log::error!("Command error: {}", e);
                CommandResult::failed(e.to_string())
            }
            None => {
                log::warn!("Unknown command: {}", input);
                CommandResult::failed(self.store.translate_with("commands.unknown", &[input]))
            }
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.registry.list_commands()
    }

    fn help_text(&self) -> String {
        let mut lines = vec![self.store.translate("commands.help.header")];
        lines.extend(
            self.list_commands()
                .into_iter()
                .map(|(name, description)| format!("  {:<8} {}", name, description)),
        );
        lines.join("\n")
    }
}
