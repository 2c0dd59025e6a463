//! Boolean text-mapping pipe.

use super::{Pipe, PipeError, PipeRegistration};
use crate::parameter::{Parameter, ParameterKind};

/// Maps a Boolean parameter to configured text values.
///
/// Example placeholder: `{{IsActive|boolean:trueValue=Yes,falseValue=No}}`.
/// An unconfigured side, like an absent input value, produces an absent
/// Text value so the name fallback applies at render time.
#[derive(Debug, Clone, Default)]
pub struct BooleanPipe {
    true_value: Option<String>,
    false_value: Option<String>,
}

impl BooleanPipe {
    /// Create a boolean pipe with the given true/false replacement texts
    pub fn new(true_value: Option<String>, false_value: Option<String>) -> Self {
        Self {
            true_value,
            false_value,
        }
    }

    /// Registration for the `boolean` pipe name
    pub fn registration() -> PipeRegistration {
        PipeRegistration::new("boolean", |args| {
            Ok(Box::new(BooleanPipe::new(
                args.get("trueValue").map(str::to_string),
                args.get("falseValue").map(str::to_string),
            )))
        })
    }
}

impl Pipe for BooleanPipe {
    fn transform(&self, parameter: &Parameter) -> Result<Parameter, PipeError> {
        let value = match parameter {
            Parameter::Boolean { value, .. } => value,
            other => {
                return Err(PipeError::TypeMismatch {
                    name: other.name().to_string(),
                    expected: ParameterKind::Boolean,
                    actual: other.kind(),
                })
            }
        };

        let text = value.and_then(|v| {
            if v {
                self.true_value.clone()
            } else {
                self.false_value.clone()
            }
        });

        Ok(Parameter::text(parameter.name(), text))
    }
}
