use crate::core::prelude::*;
use crate::store::LanguageStore;
use futures::future::BoxFuture;

/// What a command hands back to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Message(String),
    /// Print the message, then stop reading input.
    Exit(String),
}

pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn matches(&self, command: &str) -> bool;

    fn execute<'a>(
        &'a self,
        store: &'a LanguageStore,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, Result<CommandOutput>>;

    fn priority(&self) -> u8 {
        50
    }
}
