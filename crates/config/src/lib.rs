//! Layered configuration access for services and tools.
//!
//! This crate provides a thin facade over [figment], the delegate store
//! that performs the actual file parsing, nested-key merging, and
//! environment-variable mapping. A [`ConfigLoader`] builds the merged
//! state from a required default file, an optional environment-selected
//! overlay file, and environment variables; the resulting [`Config`]
//! exposes typed, infallible accessors over dot-delimited keys.
//!
//! Precedence, highest first: environment values (bound or automatic),
//! overlay file, default file, seeded base configuration.

pub mod constants;

mod coerce;
mod facade;
mod format;
mod loader;

pub use facade::Config;
pub use format::{FileFormat, UnknownFormatError};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
