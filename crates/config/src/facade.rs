//! Read-only typed access over the merged configuration.
//!
//! Responsibilities:
//! - Expose typed getters over dot-delimited keys with zero-value fallback.
//! - Provide existence checks, sub-tree scoping, and full snapshots.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader`).
//!
//! Invariants:
//! - Getters never fail; missing or wrong-shape values yield the zero
//!   value of the requested type.
//! - String values coerce to the requested scalar type where possible,
//!   matching the delegate's treatment of environment-sourced values.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use figment::Figment;
use figment::providers::Serialized;
use figment::value::Dict;

use crate::coerce;

/// Read-only facade over the merged configuration state.
///
/// Built by [`ConfigLoader::load`](crate::ConfigLoader::load). Each
/// facade owns its delegate store exclusively; `clone` produces an
/// independent copy. All accessors are safe for concurrent use.
#[derive(Clone)]
pub struct Config {
    figment: Figment,
}

impl Config {
    pub(crate) fn new(figment: Figment) -> Self {
        Self { figment }
    }

    /// Look up a boolean. Missing or non-boolean values yield `false`;
    /// the strings `"true"`/`"false"`/`"1"`/`"0"` coerce.
    pub fn get_bool(&self, key: &str) -> bool {
        if let Ok(value) = self.figment.extract_inner::<bool>(key) {
            return value;
        }
        self.string_at(key)
            .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Look up a signed integer. Missing or non-numeric values yield `0`.
    pub fn get_int(&self, key: &str) -> i64 {
        if let Ok(value) = self.figment.extract_inner::<i64>(key) {
            return value;
        }
        self.string_at(key)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Look up an unsigned integer. Missing, negative, or non-numeric
    /// values yield `0`.
    pub fn get_uint(&self, key: &str) -> u64 {
        if let Ok(value) = self.figment.extract_inner::<u64>(key) {
            return value;
        }
        self.string_at(key)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Look up a float. Missing or non-numeric values yield `0.0`.
    pub fn get_float(&self, key: &str) -> f64 {
        if let Ok(value) = self.figment.extract_inner::<f64>(key) {
            return value;
        }
        self.string_at(key)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.0)
    }

    /// Look up a string. Missing values yield the empty string; scalar
    /// values render to their string form.
    pub fn get_string(&self, key: &str) -> String {
        if let Ok(value) = self.figment.extract_inner::<String>(key) {
            return value;
        }
        if let Ok(value) = self.figment.extract_inner::<bool>(key) {
            return value.to_string();
        }
        if let Ok(value) = self.figment.extract_inner::<i64>(key) {
            return value.to_string();
        }
        if let Ok(value) = self.figment.extract_inner::<f64>(key) {
            return value.to_string();
        }
        String::new()
    }

    /// Look up a list of strings. Missing values yield an empty list; a
    /// lone string becomes a one-element list.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        if let Ok(values) = self.figment.extract_inner::<Vec<String>>(key) {
            return values;
        }
        self.figment
            .extract_inner::<String>(key)
            .map(|s| vec![s])
            .unwrap_or_default()
    }

    /// Look up a nested map. Missing or non-map values yield an empty map.
    pub fn get_string_map(&self, key: &str) -> Dict {
        self.figment.extract_inner::<Dict>(key).unwrap_or_default()
    }

    /// Look up a duration. Integers and floats are seconds; strings
    /// accept `ms`/`s`/`m`/`h`/`d` suffixes. Missing or unparseable
    /// values yield [`Duration::ZERO`].
    pub fn get_duration(&self, key: &str) -> Duration {
        if let Ok(s) = self.figment.extract_inner::<String>(key) {
            return coerce::duration_from_str(&s).unwrap_or(Duration::ZERO);
        }
        if let Ok(secs) = self.figment.extract_inner::<u64>(key) {
            return Duration::from_secs(secs);
        }
        if let Ok(secs) = self.figment.extract_inner::<f64>(key) {
            return Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        }
        Duration::ZERO
    }

    /// Look up a timestamp. Strings accept RFC 3339 and common date
    /// formats; integers are Unix seconds. Missing or unparseable
    /// values yield the Unix epoch.
    pub fn get_time(&self, key: &str) -> DateTime<Utc> {
        if let Ok(s) = self.figment.extract_inner::<String>(key) {
            return coerce::time_from_str(&s).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        }
        if let Ok(secs) = self.figment.extract_inner::<i64>(key) {
            return DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        }
        DateTime::<Utc>::UNIX_EPOCH
    }

    /// Whether `key` resolves to a value in any configuration source.
    pub fn contains(&self, key: &str) -> bool {
        self.figment.find_value(key).is_ok()
    }

    /// Derive a facade scoped to the nested map at `key`.
    ///
    /// If `key` is absent or does not hold a map, the returned facade is
    /// empty and independent; this never fails.
    pub fn sub(&self, key: &str) -> Config {
        match self.figment.extract_inner::<Dict>(key) {
            Ok(dict) => Config::new(Figment::from(Serialized::defaults(dict))),
            Err(_) => Config::new(Figment::new()),
        }
    }

    /// Full merged configuration snapshot, primarily for diagnostics.
    pub fn all_settings(&self) -> Dict {
        self.figment.extract().unwrap_or_default()
    }

    /// Raw access to the underlying delegate store.
    pub fn figment(&self) -> &Figment {
        &self.figment
    }

    fn string_at(&self, key: &str) -> Option<String> {
        self.figment.extract_inner::<String>(key).ok()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
