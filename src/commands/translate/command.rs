use crate::commands::command::{Command, CommandOutput};
use crate::core::prelude::*;
use crate::store::LanguageStore;
use futures::future::{BoxFuture, FutureExt};

/// `t <key> [params...]` - looks a key up in the active language.
#[derive(Debug, Default)]
pub struct TranslateCommand;

impl Command for TranslateCommand {
    fn name(&self) -> &'static str {
        "t"
    }

    fn description(&self) -> &'static str {
        "Translate a key in the active language"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "t" | "translate")
    }

    fn execute<'a>(
        &'a self,
        store: &'a LanguageStore,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, Result<CommandOutput>> {
        async move {
            let message = match args.split_first() {
                None => store.translate("commands.translate.usage"),
                Some((key, params)) => store.translate_with(key, params),
            };
            Ok(CommandOutput::Message(message))
        }
        .boxed()
    }
}
