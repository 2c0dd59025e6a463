//! Typed parameter value model.
//!
//! A [`Parameter`] is a named value supplied by the caller at bind time.
//! The set of value types is closed: text, number, date/time, and
//! boolean, each optionally absent. Rendering an absent value falls back
//! to the parameter's own name, never an empty string — templates stay
//! readable when data is missing.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A named, typed value bound to template placeholders.
///
/// Parameters are read-only: they are created fresh for each bind call
/// and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parameter {
    /// Free-form text value
    Text {
        /// Name used to match placeholders
        name: String,
        /// The text value, or `None` if not provided
        value: Option<String>,
    },
    /// Numeric value
    Number {
        /// Name used to match placeholders
        name: String,
        /// The numeric value, or `None` if not provided
        value: Option<f64>,
    },
    /// Date/time value in UTC
    DateTime {
        /// Name used to match placeholders
        name: String,
        /// The date/time value, or `None` if not provided
        value: Option<DateTime<Utc>>,
    },
    /// Boolean value
    Boolean {
        /// Name used to match placeholders
        name: String,
        /// The boolean value, or `None` if not provided
        value: Option<bool>,
    },
}

/// The value type carried by a [`Parameter`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    Text,
    Number,
    DateTime,
    Boolean,
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParameterKind::Text => "Text",
            ParameterKind::Number => "Number",
            ParameterKind::DateTime => "DateTime",
            ParameterKind::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

impl Parameter {
    /// Create a text parameter
    pub fn text(name: impl Into<String>, value: Option<String>) -> Self {
        Parameter::Text {
            name: name.into(),
            value,
        }
    }

    /// Create a numeric parameter
    pub fn number(name: impl Into<String>, value: Option<f64>) -> Self {
        Parameter::Number {
            name: name.into(),
            value,
        }
    }

    /// Create a date/time parameter
    pub fn date_time(name: impl Into<String>, value: Option<DateTime<Utc>>) -> Self {
        Parameter::DateTime {
            name: name.into(),
            value,
        }
    }

    /// Create a boolean parameter
    pub fn boolean(name: impl Into<String>, value: Option<bool>) -> Self {
        Parameter::Boolean {
            name: name.into(),
            value,
        }
    }

    /// The parameter name used to match placeholders. Case-sensitive.
    pub fn name(&self) -> &str {
        match self {
            Parameter::Text { name, .. }
            | Parameter::Number { name, .. }
            | Parameter::DateTime { name, .. }
            | Parameter::Boolean { name, .. } => name,
        }
    }

    /// The value type of this parameter
    pub fn kind(&self) -> ParameterKind {
        match self {
            Parameter::Text { .. } => ParameterKind::Text,
            Parameter::Number { .. } => ParameterKind::Number,
            Parameter::DateTime { .. } => ParameterKind::DateTime,
            Parameter::Boolean { .. } => ParameterKind::Boolean,
        }
    }

    /// Whether a value is present
    pub fn has_value(&self) -> bool {
        match self {
            Parameter::Text { value, .. } => value.is_some(),
            Parameter::Number { value, .. } => value.is_some(),
            Parameter::DateTime { value, .. } => value.is_some(),
            Parameter::Boolean { value, .. } => value.is_some(),
        }
    }

    /// Canonical string form of the value, or `None` when absent.
    ///
    /// Numbers render via `f64` display (`42`, `25.5`), date/times as
    /// RFC 3339 with a `Z` suffix, booleans as `true`/`false`.
    pub fn value_text(&self) -> Option<String> {
        match self {
            Parameter::Text { value, .. } => value.clone(),
            Parameter::Number { value, .. } => value.map(|n| n.to_string()),
            Parameter::DateTime { value, .. } => value
                .map(|d| d.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Parameter::Boolean { value, .. } => value.map(|b| b.to_string()),
        }
    }

    /// Rendered text for this parameter: the canonical value text, or
    /// the parameter name when the value is absent.
    pub fn to_text(&self) -> String {
        self.value_text()
            .unwrap_or_else(|| self.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_with_value_returns_value() {
        let param = Parameter::text("Name", Some("John".to_string()));

        assert_eq!(param.name(), "Name");
        assert_eq!(param.kind(), ParameterKind::Text);
        assert_eq!(param.to_text(), "John");
    }

    #[test]
    fn test_text_without_value_returns_name() {
        let param = Parameter::text("Name", None);

        assert!(!param.has_value());
        assert_eq!(param.value_text(), None);
        assert_eq!(param.to_text(), "Name");
    }

    #[test]
    fn test_number_with_value_returns_value() {
        let param = Parameter::number("Age", Some(25.5));

        assert_eq!(param.kind(), ParameterKind::Number);
        assert_eq!(param.to_text(), "25.5");
    }

    #[test]
    fn test_number_whole_value_has_no_trailing_decimals() {
        let param = Parameter::number("Count", Some(42.0));

        assert_eq!(param.to_text(), "42");
    }

    #[test]
    fn test_number_without_value_returns_name() {
        let param = Parameter::number("Age", None);

        assert_eq!(param.to_text(), "Age");
    }

    #[test]
    fn test_date_time_with_value_returns_iso8601() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
        let param = Parameter::date_time("CreatedAt", Some(date));

        assert_eq!(param.kind(), ParameterKind::DateTime);
        assert_eq!(param.to_text(), "2024-01-15T10:30:45Z");
    }

    #[test]
    fn test_date_time_without_value_returns_name() {
        let param = Parameter::date_time("CreatedAt", None);

        assert_eq!(param.to_text(), "CreatedAt");
    }

    #[test]
    fn test_boolean_values_render_lowercase() {
        assert_eq!(Parameter::boolean("IsActive", Some(true)).to_text(), "true");
        assert_eq!(
            Parameter::boolean("IsActive", Some(false)).to_text(),
            "false"
        );
    }

    #[test]
    fn test_boolean_without_value_returns_name() {
        let param = Parameter::boolean("IsActive", None);

        assert_eq!(param.to_text(), "IsActive");
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ParameterKind::Text.to_string(), "Text");
        assert_eq!(ParameterKind::DateTime.to_string(), "DateTime");
    }
}
