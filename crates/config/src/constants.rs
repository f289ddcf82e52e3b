//! Centralized default values for configuration loading.

/// Default prefix prepended to configuration file names.
///
/// A prefix is a raw string prefix, not a directory: `"config/"` and
/// `"config/app-"` are both valid.
pub const DEFAULT_FILE_PREFIX: &str = "config/";

/// Default name of the environment variable that selects the overlay file.
pub const DEFAULT_SELECTOR_VAR: &str = "ENV";

/// Fixed base name of the required default configuration file.
pub const DEFAULT_BASENAME: &str = "default";

/// Whether automatic environment capture is enabled by default.
pub const DEFAULT_AUTOMATIC_ENV: bool = true;
