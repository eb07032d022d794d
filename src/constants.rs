// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Minimum topic length in characters, after trimming.
///
/// Shorter topics are rejected before any request is built.
///
/// Used in: `domain/topic.rs`
pub const MIN_TOPIC_CHARS: usize = 3;

/// Maximum number of entries kept in the submission history.
///
/// Used in: `application/history.rs`
pub const HISTORY_LIMIT: usize = 10;

/// Storage key of the submission history.
///
/// Used in: `application/history.rs`
pub const HISTORY_KEY: &str = "noteHistory";

/// Storage key of the last-used preferences.
///
/// Used in: `application/preferences.rs`
pub const PREFERENCES_KEY: &str = "notePreferences";

/// Subject used when neither the command line nor saved preferences name one.
pub const DEFAULT_SUBJECT: &str = "mathematics";

/// Note type used when neither the command line nor saved preferences name one.
pub const DEFAULT_NOTE_TYPE: &str = "summary";

/// Base URL of the note generator when no config or flag overrides it.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Request timeout in seconds.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fallback message when a failed response carries no `error` field.
///
/// Used in: `infrastructure/http.rs`
pub const GENERIC_API_ERROR: &str = "Failed to generate notes";

/// Width of the dashed separator below the metadata line in text exports.
///
/// Used in: `ports/text.rs`
pub const TEXT_SEPARATOR_WIDTH: usize = 50;

/// Delay in milliseconds after launching the browser before returning.
///
/// The temporary directory holding the page is removed when the process
/// exits, so the browser needs a brief moment to load the file first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
