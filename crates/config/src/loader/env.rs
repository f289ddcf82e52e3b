//! Environment variable access for configuration loading.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Derive environment-variable names from configuration keys.
//! - Define the injectable lookup type used by the builder.
//!
//! Does NOT handle:
//! - Automatic environment capture (delegated to figment's `Env`
//!   provider, see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Derived names are upper-cased with key-path dots joined by
//!   underscores, e.g. `database.host` binds to `DATABASE_HOST`.

/// Environment lookup function injected into the builder.
///
/// Used for the overlay-selector variable and explicit bind keys so
/// construction can be made deterministic in tests.
pub(crate) type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Derive the environment-variable name for a configuration key.
///
/// The key is upper-cased and its path segments joined with
/// underscores; the prefix, when present, is upper-cased and prepended
/// with an underscore separator.
pub(crate) fn env_var_name(prefix: Option<&str>, key: &str) -> String {
    let mapped = key.to_uppercase().replace('.', "_");
    match prefix {
        Some(p) if !p.trim().is_empty() => format!("{}_{}", p.to_uppercase(), mapped),
        _ => mapped,
    }
}
