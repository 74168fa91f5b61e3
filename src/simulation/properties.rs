//! Minimal reader for `.properties` style configuration files.
//!
//! Supported syntax:
//!
//! - one `key=value`, `key: value` or `key value` entry per line; the key
//!   ends at the first `=`, `:` or whitespace
//! - whitespace around keys and values is trimmed
//! - lines starting with `#` or `!` are comments, blank lines are skipped
//! - a line without a separator defines the key with an empty value
//! - later entries replace earlier ones
//!
//! Escapes and line continuations are not supported.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use super::ConfigError;

/// Parsed key/value pairs.
///
/// # Examples
///
/// ```rust
/// use massive_motion::simulation::Properties;
///
/// let properties = Properties::parse("# comment\nlist = double\nbody_size: 12\n");
/// assert_eq!(properties.get("list"), Some("double"));
/// assert_eq!(properties.get_or("body_size", 10_u32).unwrap(), 12);
/// assert_eq!(properties.get_or("star_size", 30_u32).unwrap(), 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parses properties from text.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(['#', '!']))
            .map(split_entry)
            .collect()
    }

    /// Reads and parses a properties file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parses the value stored under `key`, or returns `default` when the key
    /// is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the key is present but its
    /// value does not parse as `V`.
    pub fn get_or<V>(&self, key: &str, default: V) -> Result<V, ConfigError>
    where
        V: FromStr,
        V::Err: Display,
    {
        self.get(key).map_or(Ok(default), |value| {
            value.parse().map_err(|error: V::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                message: error.to_string(),
            })
        })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Splits a trimmed, non-comment line into key and value.
///
/// Whitespace around a `=` or `:` separator belongs to the separator, so
/// `key = value` and `key value` both yield `("key", "value")`.
fn split_entry(line: &str) -> (&str, &str) {
    let Some(end) = line.find(|c: char| c == '=' || c == ':' || c.is_whitespace()) else {
        return (line, "");
    };
    let (key, rest) = line.split_at(end);
    let rest = rest.trim_start();
    let value = rest
        .strip_prefix(['=', ':'])
        .map_or(rest, str::trim_start);
    (key, value)
}
