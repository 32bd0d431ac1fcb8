// store/manager.rs - language preference store

use super::persistence::{LanguageBackend, MemoryBackend, TomlBackend};
use super::state::{LanguageState, TransitionPhase, TransitionTiming};
use crate::core::prelude::*;
use crate::i18n::{TranslationTable, AVAILABLE_LANGUAGES, DEFAULT_LANGUAGE};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Single source of truth for the display language.
///
/// Created once at bootstrap and handed to consumers by clone (all clones
/// share the same state). `set_language` runs a timed three-step sequence:
/// overlay up, swap language behind it, overlay down and commit. A newer
/// request supersedes any sequence still in flight.
#[derive(Clone)]
pub struct LanguageStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<TransitionState>,
    tx: watch::Sender<LanguageState>,
    // Generation of the last transition that ran to completion, commit included.
    finished: watch::Sender<u64>,
    backend: Arc<dyn LanguageBackend>,
    table: TranslationTable,
    timing: TransitionTiming,
    // Serializes commits so an older save can never land after a newer one.
    commit_lock: tokio::sync::Mutex<()>,
}

struct TransitionState {
    snapshot: LanguageState,
    phase: TransitionPhase,
    generation: u64,
    // Cancels the chain that is still in flight, if any.
    pending: Option<CancellationToken>,
}

impl LanguageStore {
    /// Reads the persisted language; absent or unreadable falls back to `tr`.
    pub async fn bootstrap(
        backend: Arc<dyn LanguageBackend>,
        table: TranslationTable,
        timing: TransitionTiming,
    ) -> Self {
        let language = match backend.load().await {
            Ok(Some(lang)) => {
                log::debug!("Persisted language: {}", lang);
                lang
            }
            Ok(None) => {
                log::debug!("No persisted language, using {}", DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE
            }
            Err(e) => {
                log::warn!(
                    "Could not load persisted language ({}), using {}",
                    e,
                    DEFAULT_LANGUAGE
                );
                DEFAULT_LANGUAGE
            }
        };

        Self::new(language, backend, table, timing)
    }

    /// Store backed by the config file when it has one, in-memory otherwise.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let backend: Arc<dyn LanguageBackend> = match config.config_path() {
            Some(path) => Arc::new(TomlBackend::new(path)),
            None => {
                log::warn!("No config file, language choice will not survive restarts");
                Arc::new(MemoryBackend::with_language(config.language))
            }
        };
        let table = TranslationTable::embedded()?;
        Ok(Self::bootstrap(backend, table, TransitionTiming::from_config(config)).await)
    }

    fn new(
        language: LanguageCode,
        backend: Arc<dyn LanguageBackend>,
        table: TranslationTable,
        timing: TransitionTiming,
    ) -> Self {
        let snapshot = LanguageState::idle(language);
        let (tx, _) = watch::channel(snapshot);
        let (finished, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(TransitionState {
                    snapshot,
                    phase: TransitionPhase::Idle,
                    generation: 0,
                    pending: None,
                }),
                tx,
                finished,
                backend,
                table,
                timing,
                commit_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.lock().snapshot.language
    }

    pub fn is_changing_language(&self) -> bool {
        self.lock().snapshot.is_changing_language
    }

    pub fn phase(&self) -> TransitionPhase {
        self.lock().phase
    }

    pub fn state(&self) -> LanguageState {
        self.lock().snapshot
    }

    /// Receives every observable change, in order.
    pub fn subscribe(&self) -> watch::Receiver<LanguageState> {
        self.inner.tx.subscribe()
    }

    pub fn timing(&self) -> TransitionTiming {
        self.inner.timing
    }

    pub fn table(&self) -> &TranslationTable {
        &self.inner.table
    }

    pub fn available_languages(&self) -> &'static [LanguageCode] {
        AVAILABLE_LANGUAGES
    }

    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    pub fn translate_with(&self, key: &str, params: &[&str]) -> String {
        self.inner.table.lookup(self.language(), key, params)
    }

    /// Starts a transition to `code` and returns immediately.
    ///
    /// Requesting the active language still runs the full sequence. Must be
    /// called from within a Tokio runtime.
    pub fn set_language(&self, code: LanguageCode) {
        let started = Instant::now();
        let mut state = self.lock();

        if let Some(previous) = state.pending.take() {
            previous.cancel();
            log::debug!("Superseding pending language transition");
        }

        state.generation += 1;
        let generation = state.generation;
        state.snapshot.is_changing_language = true;
        state.phase = TransitionPhase::PreSwap;
        self.inner.tx.send_replace(state.snapshot);

        let cancel = CancellationToken::new();
        tokio::spawn(
            self.clone()
                .run_transition(code, generation, started, cancel.clone()),
        );
        state.pending = Some(cancel);

        log::info!("Language change requested: {} -> {}", state.snapshot.language, code);
    }

    /// Parses `code` first; unsupported codes leave the store untouched.
    pub fn set_language_str(&self, code: &str) -> Result<LanguageCode> {
        let lang: LanguageCode = code.parse()?;
        self.set_language(lang);
        Ok(lang)
    }

    /// Waits until no transition is in flight and its commit has finished.
    /// Any number of callers may wait at once; a request arriving meanwhile
    /// extends the wait to that request.
    pub async fn settle(&self) {
        let mut finished = self.inner.finished.subscribe();
        loop {
            let generation = {
                let state = self.lock();
                if state.pending.is_none() {
                    return;
                }
                state.generation
            };
            if finished.wait_for(|done| *done >= generation).await.is_err() {
                return;
            }
        }
    }

    async fn run_transition(
        self,
        target: LanguageCode,
        generation: u64,
        started: Instant,
        cancel: CancellationToken,
    ) {
        let swap_at = started + self.inner.timing.swap_delay;
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = sleep_until(swap_at) => {}
        }
        let swapped = self.apply(generation, |state| {
            state.snapshot.language = target;
            state.phase = TransitionPhase::PostSwap;
        });
        if !swapped {
            return;
        }
        log::debug!("Language swapped to {} behind overlay", target);

        let reveal_at = swap_at + self.inner.timing.reveal_delay;
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = sleep_until(reveal_at) => {}
        }

        let revealed = self.apply(generation, |state| {
            state.snapshot.is_changing_language = false;
            state.phase = TransitionPhase::Idle;
        });
        if !revealed {
            return;
        }

        let _commit = self.inner.commit_lock.lock().await;
        match self.inner.backend.save(target).await {
            Ok(()) => log::info!("Language {} committed", target),
            Err(e) => log::warn!("Failed to persist language {}: {}", target, e),
        }

        let mut state = self.lock();
        if state.generation == generation {
            state.pending = None;
        }
        self.inner.finished.send_if_modified(|done| {
            let newer = generation > *done;
            if newer {
                *done = generation;
            }
            newer
        });
    }

    /// Runs `step` only if `generation` is still the latest request.
    fn apply(&self, generation: u64, step: impl FnOnce(&mut TransitionState)) -> bool {
        let mut state = self.lock();
        if state.generation != generation {
            return false;
        }
        step(&mut state);
        self.inner.tx.send_replace(state.snapshot);
        true
    }

    fn lock(&self) -> MutexGuard<'_, TransitionState> {
        match self.inner.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::error!("Language store mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("LanguageStore")
            .field("language", &state.snapshot.language)
            .field("is_changing_language", &state.snapshot.is_changing_language)
            .field("phase", &state.phase)
            .finish()
    }
}
