//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Load configuration from a required default file, an optional
//!   environment-selected overlay file, and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration
//!   merging over the figment delegate store.
//!
//! Does NOT handle:
//! - Typed access to the merged state (see `facade`).
//! - File parsing and merge semantics (delegated to figment).
//!
//! Invariants / Assumptions:
//! - Environment values take precedence over overlay values, which take
//!   precedence over default-file values.
//! - The default file is required; the overlay file is optional.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
