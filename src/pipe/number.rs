//! Numeric formatting pipe.

use std::str::FromStr;

use super::{Pipe, PipeError, PipeRegistration, RegistryError};
use crate::parameter::{Parameter, ParameterKind};

/// Formats a Number parameter with an `N<p>`/`F<p>` specifier.
///
/// Example placeholder: `{{Price|number:format=N2}}` renders `1234.567`
/// as `1,234.57`. `N` groups thousands with commas, `F` is plain
/// fixed-point; the digit suffix is the decimal precision, defaulting
/// to 2. Without a `format` argument the value renders via `f64`
/// display.
#[derive(Debug, Clone)]
pub struct NumberPipe {
    format: Option<NumberFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberFormat {
    /// Thousands-grouped fixed point, e.g. `1,234.57`
    Numeric { precision: usize },
    /// Plain fixed point, e.g. `1234.57`
    Fixed { precision: usize },
}

impl FromStr for NumberFormat {
    type Err = String;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut chars = spec.chars();
        let kind = chars.next().ok_or_else(|| "empty specifier".to_string())?;
        let digits = chars.as_str();

        let precision = if digits.is_empty() {
            2
        } else {
            digits
                .parse::<usize>()
                .map_err(|_| format!("invalid precision {digits:?}"))?
        };

        match kind {
            'N' | 'n' => Ok(NumberFormat::Numeric { precision }),
            'F' | 'f' => Ok(NumberFormat::Fixed { precision }),
            other => Err(format!("unsupported specifier {other:?}")),
        }
    }
}

impl NumberFormat {
    fn apply(&self, value: f64) -> String {
        match self {
            NumberFormat::Fixed { precision } => format!("{:.*}", *precision, value),
            NumberFormat::Numeric { precision } => {
                group_thousands(&format!("{:.*}", *precision, value))
            }
        }
    }
}

/// Insert `,` separators into the integer digits of a fixed-point string
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    grouped
}

impl NumberPipe {
    /// Create a number pipe, parsing the format specifier if one is given
    pub fn new(format: Option<&str>) -> Result<Self, RegistryError> {
        let format = format
            .map(|spec| {
                spec.parse::<NumberFormat>()
                    .map_err(|reason| RegistryError::ArgumentConversion {
                        argument: "format".to_string(),
                        value: spec.to_string(),
                        reason,
                    })
            })
            .transpose()?;

        Ok(Self { format })
    }

    /// Registration for the `number` pipe name
    pub fn registration() -> PipeRegistration {
        PipeRegistration::new("number", |args| {
            Ok(Box::new(NumberPipe::new(args.get("format"))?))
        })
    }
}

impl Pipe for NumberPipe {
    fn transform(&self, parameter: &Parameter) -> Result<Parameter, PipeError> {
        let value = match parameter {
            Parameter::Number { value, .. } => value,
            other => {
                return Err(PipeError::TypeMismatch {
                    name: other.name().to_string(),
                    expected: ParameterKind::Number,
                    actual: other.kind(),
                })
            }
        };

        let text = value.map(|v| match &self.format {
            Some(format) => format.apply(v),
            None => v.to_string(),
        });

        Ok(Parameter::text(parameter.name(), text))
    }
}
