use crate::commands::command::{Command, CommandOutput};
use crate::core::prelude::*;
use crate::store::LanguageStore;
use futures::future::{BoxFuture, FutureExt};

#[derive(Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Finish any language change, then exit"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "exit" | "q" | "quit")
    }

    fn execute<'a>(
        &'a self,
        store: &'a LanguageStore,
        _args: &'a [&'a str],
    ) -> BoxFuture<'a, Result<CommandOutput>> {
        async move {
            // A pending change is only persisted once it reaches idle.
            store.settle().await;
            Ok(CommandOutput::Exit(store.translate("commands.exit")))
        }
        .boxed()
    }

    fn priority(&self) -> u8 {
        100
    }
}
