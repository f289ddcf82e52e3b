//! Configuration file formats supported by the loader.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Format as _, Toml, Yaml};
use thiserror::Error;

/// A file format string was not recognized.
#[derive(Error, Debug)]
#[error("unknown config file format '{0}', expected \"toml\" or \"yaml\"")]
pub struct UnknownFormatError(String);

/// File format of the default and overlay configuration files.
///
/// The format determines both the parser used by the delegate store and
/// the file extension appended to configuration file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Toml,
    Yaml,
}

impl FileFormat {
    /// File extension for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }

    /// Merge the file at `path` into `figment` using this format's parser.
    pub(crate) fn merge_file(&self, figment: Figment, path: &Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file(path)),
            Self::Yaml => figment.merge(Yaml::file(path)),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(UnknownFormatError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("toml".parse::<FileFormat>().unwrap(), FileFormat::Toml);
        assert_eq!("yaml".parse::<FileFormat>().unwrap(), FileFormat::Yaml);
        assert_eq!("yml".parse::<FileFormat>().unwrap(), FileFormat::Yaml);
        assert_eq!("YAML".parse::<FileFormat>().unwrap(), FileFormat::Yaml);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "ini".parse::<FileFormat>().unwrap_err();
        assert!(err.to_string().contains("ini"));
    }

    #[test]
    fn extension_matches_display() {
        assert_eq!(FileFormat::Toml.extension(), "toml");
        assert_eq!(FileFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn default_is_toml() {
        assert_eq!(FileFormat::default(), FileFormat::Toml);
    }
}
