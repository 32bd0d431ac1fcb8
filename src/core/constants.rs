pub const APP_TITLE: &str = "ENERGY DASHBOARD";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overlay goes up, then the language swaps behind it after this delay.
pub const DEFAULT_SWAP_DELAY_MS: u64 = 100;
/// Time the overlay stays up after the swap, measured from the swap.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;
pub const MAX_TRANSITION_DELAY_MS: u64 = 10_000;

pub const CONFIG_DIR: &str = ".eds";
pub const CONFIG_FILE: &str = "dashboard.toml";

/// `[language] current` in the config file.
pub const STORAGE_SECTION: &str = "language";
pub const STORAGE_KEY: &str = "current";

pub const TRANSLATION_CACHE_SIZE: usize = 1000;
