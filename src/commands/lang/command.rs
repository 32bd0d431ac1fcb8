use crate::commands::command::{Command, CommandOutput};
use crate::core::prelude::*;
use crate::store::LanguageStore;
use futures::future::{BoxFuture, FutureExt};

#[derive(Debug, Default)]
pub struct LanguageCommand;

impl LanguageCommand {
    fn show_status(store: &LanguageStore) -> String {
        let available = store
            .available_languages()
            .iter()
            .map(|lang| format!("{} ({})", lang, lang.native_name()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}\n{}",
            store.translate_with("commands.lang.current", &[store.language().code()]),
            store.translate_with("commands.lang.available", &[&available])
        )
    }
}

impl Command for LanguageCommand {
    fn name(&self) -> &'static str {
        "lang"
    }

    fn description(&self) -> &'static str {
        "Show or change the display language"
    }

    fn matches(&self, command: &str) -> bool {
        command.trim().to_lowercase().starts_with("lang")
    }

    fn execute<'a>(
        &'a self,
        store: &'a LanguageStore,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, Result<CommandOutput>> {
        async move {
            let message = match args.first() {
                None => Self::show_status(store),
                Some(&lang) => match store.set_language_str(lang) {
                    Ok(code) => store.translate_with("commands.lang.changing", &[code.code()]),
                    Err(e) => {
                        log::warn!("{}", e);
                        store.translate_with("commands.lang.invalid", &[lang])
                    }
                },
            };
            Ok(CommandOutput::Message(message))
        }
        .boxed()
    }

    fn priority(&self) -> u8 {
        70
    }
}
