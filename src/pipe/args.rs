//! Ordered pipe argument collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::registry::RegistryError;

/// Order-preserving `key=value` arguments for a pipe, as written in the
/// placeholder syntax.
///
/// Keys are matched case-insensitively. Duplicate keys are collapsed to
/// a single entry: the last written value wins, the first position is
/// kept. Values are raw strings; builders convert them to their declared
/// types through [`get_parsed`](PipeArgs::get_parsed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeArgs {
    entries: Vec<(String, String)>,
}

impl PipeArgs {
    /// Create an empty argument collection
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an argument, overwriting the value of an existing key
    /// (compared case-insensitively) in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&key))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up an argument value by case-insensitive key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Look up an argument and convert it to a typed value.
    ///
    /// An absent key yields `Ok(None)`; a present value that fails to
    /// convert yields [`RegistryError::ArgumentConversion`] naming the
    /// argument and the raw string.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, RegistryError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| RegistryError::ArgumentConversion {
                    argument: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Number of distinct arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate arguments in written order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_case_insensitive() {
        let mut args = PipeArgs::new();
        args.insert("format", "%Y");

        assert_eq!(args.get("FORMAT"), Some("%Y"));
        assert_eq!(args.get("Format"), Some("%Y"));
    }

    #[test]
    fn test_missing_key_returns_none() {
        let args = PipeArgs::new();

        assert_eq!(args.get("format"), None);
    }

    #[test]
    fn test_duplicate_insert_overwrites_in_place() {
        let mut args = PipeArgs::new();
        args.insert("a", "1");
        args.insert("b", "2");
        args.insert("A", "3");

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some("3"));
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_get_parsed_converts_value() {
        let mut args = PipeArgs::new();
        args.insert("precision", "4");

        let parsed: Option<usize> = args.get_parsed("precision").unwrap();
        assert_eq!(parsed, Some(4));
    }

    #[test]
    fn test_get_parsed_absent_key_is_ok_none() {
        let args = PipeArgs::new();

        let parsed: Option<bool> = args.get_parsed("enabled").unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn test_get_parsed_bad_value_names_argument_and_raw_string() {
        let mut args = PipeArgs::new();
        args.insert("precision", "lots");

        let err = args.get_parsed::<usize>("precision").unwrap_err();
        match err {
            RegistryError::ArgumentConversion {
                argument, value, ..
            } => {
                assert_eq!(argument, "precision");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
