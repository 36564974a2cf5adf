//! Application-level configuration constants.

// Data source
pub const TIER_TABLE_URL: &str = "harvest_tiers.txt";

// Browser storage keys
pub const SESSION_STORAGE_KEY: &str = "torchlight-harvest-tiers";
pub const THEME_STORAGE_KEY: &str = "torch-calculator-theme";

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;
pub const AUTOSAVE_INTERVAL_MS: u32 = 30_000;

// Default values for input fields
pub const DEFAULT_COOLDOWN_PCT: f64 = 0.0;
