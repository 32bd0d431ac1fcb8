// store/mod.rs

pub mod manager;
pub mod persistence;
pub mod state;

pub use manager::LanguageStore;
pub use persistence::{LanguageBackend, MemoryBackend, TomlBackend};
pub use state::{LanguageState, TransitionPhase, TransitionTiming};
