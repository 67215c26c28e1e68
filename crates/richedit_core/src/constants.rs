//! Shared constants used across richedit crates.

/// Placeholder shown by an empty editor when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Start typing...";

/// Default simulated latency for content loads, in milliseconds.
pub const DEFAULT_LOAD_LATENCY_MS: u64 = 1_000;
/// Default simulated latency for content saves, in milliseconds.
pub const DEFAULT_SAVE_LATENCY_MS: u64 = 800;
/// Default probability that a simulated save fails.
pub const DEFAULT_SAVE_FAILURE_RATE: f64 = 0.1;

/// Length of generated block keys.
pub const BLOCK_KEY_LEN: usize = 5;

/// Accessible label of the formatting toolbar.
pub const TOOLBAR_ARIA_LABEL: &str = "Text formatting toolbar";

/// Service message for an unknown content id.
pub const MSG_CONTENT_NOT_FOUND: &str = "Content not found";
/// Service message for an injected save failure.
pub const MSG_SIMULATED_SAVE_FAILURE: &str = "Network error: Failed to save content";
/// Fallback when a load is refused without a message.
pub const MSG_LOAD_FAILED: &str = "Failed to load content";
/// Fallback when a save is refused without a message.
pub const MSG_SAVE_FAILED: &str = "Failed to save content";
/// Generic message for a load that never reached the service.
pub const MSG_NETWORK_LOAD: &str = "Network error: Unable to load content";
/// Generic message for a save that never reached the service.
pub const MSG_NETWORK_SAVE: &str = "Network error: Unable to save content";
/// Message for a save attempted before any successful load.
pub const MSG_NO_CONTENT_ID: &str = "No content ID specified for saving";
