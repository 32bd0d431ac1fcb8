use super::command::{Command, CommandOutput};
use crate::core::prelude::*;
use crate::store::LanguageStore;
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    name_map: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        let name = command.name().to_lowercase();
        let index = self.commands.len();

        self.commands.push(Box::new(command));
        self.name_map.insert(name, index);
        self
    }

    pub fn find_command(&self, input: &str) -> Option<&dyn Command> {
        let input = input.trim().to_lowercase();

        // Exact name first
        if let Some(&index) = self.name_map.get(&input) {
            return self.commands.get(index).map(|cmd| cmd.as_ref());
        }

        // Then pattern matching, highest priority wins
        self.commands
            .iter()
            .filter(|cmd| cmd.matches(&input))
            .max_by_key(|cmd| cmd.priority())
            .map(|cmd| cmd.as_ref())
    }

    pub async fn execute(
        &self,
        store: &LanguageStore,
        command: &str,
        args: &[&str],
    ) -> Option<Result<CommandOutput>> {
        match self.find_command(command) {
            Some(cmd) => Some(cmd.execute(store, args).await),
            None => None,
        }
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|cmd| (cmd.name(), cmd.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
