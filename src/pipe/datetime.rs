//! Date/time formatting pipe.

use chrono::format::{Item, StrftimeItems};

use super::{Pipe, PipeError, PipeRegistration, RegistryError};
use crate::parameter::{Parameter, ParameterKind};

/// RFC 3339, e.g. `2024-01-15T10:30:45+00:00`
const DEFAULT_FORMAT: &str = "%+";

/// Formats a DateTime parameter with a strftime pattern.
///
/// Example placeholder: `{{Date|datetime:format=%Y-%m-%d}}`. Without a
/// `format` argument the value renders as RFC 3339. The pattern is
/// validated up front so formatting at bind time cannot fail.
#[derive(Debug, Clone)]
pub struct DateTimePipe {
    format: Option<String>,
}

impl DateTimePipe {
    /// Create a datetime pipe, validating the pattern if one is given
    pub fn new(format: Option<String>) -> Result<Self, RegistryError> {
        if let Some(format) = &format {
            validate_format(format)?;
        }
        Ok(Self { format })
    }

    /// Registration for the `datetime` pipe name
    pub fn registration() -> PipeRegistration {
        PipeRegistration::new("datetime", |args| {
            let format = args.get("format").map(str::to_string);
            Ok(Box::new(DateTimePipe::new(format)?))
        })
    }
}

fn validate_format(format: &str) -> Result<(), RegistryError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(RegistryError::ArgumentConversion {
            argument: "format".to_string(),
            value: format.to_string(),
            reason: "not a valid strftime pattern".to_string(),
        });
    }
    Ok(())
}

impl Pipe for DateTimePipe {
    fn transform(&self, parameter: &Parameter) -> Result<Parameter, PipeError> {
        let value = match parameter {
            Parameter::DateTime { value, .. } => value,
            other => {
                return Err(PipeError::TypeMismatch {
                    name: other.name().to_string(),
                    expected: ParameterKind::DateTime,
                    actual: other.kind(),
                })
            }
        };

        let format = self.format.as_deref().unwrap_or(DEFAULT_FORMAT);
        let text = value.map(|v| v.format(format).to_string());

        Ok(Parameter::text(parameter.name(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_formats_with_supplied_pattern() {
        let pipe = DateTimePipe::new(Some("%Y-%m-%d".to_string())).unwrap();

        let result = pipe
            .transform(&Parameter::date_time("Date", Some(date())))
            .unwrap();

        assert_eq!(result.to_text(), "2024-01-15");
    }

    #[test]
    fn test_default_format_is_rfc3339() {
        let pipe = DateTimePipe::new(None).unwrap();

        let result = pipe
            .transform(&Parameter::date_time("Date", Some(date())))
            .unwrap();

        assert_eq!(result.to_text(), "2024-01-15T10:30:45+00:00");
    }

    #[test]
    fn test_absent_value_stays_absent_and_falls_back_to_name() {
        let pipe = DateTimePipe::new(Some("%Y-%m-%d".to_string())).unwrap();

        let result = pipe.transform(&Parameter::date_time("Date", None)).unwrap();

        assert_eq!(result, Parameter::text("Date", None));
        assert_eq!(result.to_text(), "Date");
    }

    #[test]
    fn test_wrong_variant_is_a_type_mismatch() {
        let pipe = DateTimePipe::new(None).unwrap();

        let err = pipe
            .transform(&Parameter::text("Name", Some("John".to_string())))
            .unwrap_err();

        assert_eq!(
            err,
            PipeError::TypeMismatch {
                name: "Name".to_string(),
                expected: ParameterKind::DateTime,
                actual: ParameterKind::Text,
            }
        );
        assert!(err.to_string().contains("Name"));
        assert!(err.to_string().contains("DateTime"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected_at_construction() {
        let err = DateTimePipe::new(Some("%Q".to_string())).unwrap_err();

        match err {
            RegistryError::ArgumentConversion { argument, value, .. } => {
                assert_eq!(argument, "format");
                assert_eq!(value, "%Q");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_time_pattern_with_colons() {
        let pipe = DateTimePipe::new(Some("%H:%M".to_string())).unwrap();

        let result = pipe
            .transform(&Parameter::date_time("Time", Some(date())))
            .unwrap();

        assert_eq!(result.to_text(), "10:30");
    }
}
