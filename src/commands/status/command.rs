use crate::commands::command::{Command, CommandOutput};
use crate::core::prelude::*;
use crate::store::{LanguageStore, TransitionPhase};
use futures::future::{BoxFuture, FutureExt};

#[derive(Debug, Default)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn description(&self) -> &'static str {
        "Show transition phase and translation cache stats"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "status" | "st")
    }

    fn execute<'a>(
        &'a self,
        store: &'a LanguageStore,
        _args: &'a [&'a str],
    ) -> BoxFuture<'a, Result<CommandOutput>> {
        async move {
            let phase = match store.phase() {
                TransitionPhase::Idle => store.translate("commands.status.idle"),
                other => store.translate_with("commands.status.transitioning", &[other.name()]),
            };
            let (hits, misses) = store.table().cache_stats();
            let cache = store.translate_with(
                "commands.status.cache",
                &[&hits.to_string(), &misses.to_string()],
            );
            Ok(CommandOutput::Message(format!(
                "[{}] {}\n{}",
                store.language(),
                phase,
                cache
            )))
        }
        .boxed()
    }
}
