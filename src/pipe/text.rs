//! Variant-agnostic text pipe.

use super::{Pipe, PipeError, PipeRegistration};
use crate::parameter::Parameter;

/// Re-renders any parameter's canonical value text as a Text parameter.
///
/// The only pipe that accepts every variant; an absent value stays
/// absent so the name fallback still applies at render time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPipe;

impl TextPipe {
    /// Create a text pipe
    pub fn new() -> Self {
        Self
    }

    /// Registration for the `text` pipe name
    pub fn registration() -> PipeRegistration {
        PipeRegistration::new("text", |_args| Ok(Box::new(TextPipe::new())))
    }
}

impl Pipe for TextPipe {
    fn transform(&self, parameter: &Parameter) -> Result<Parameter, PipeError> {
        Ok(Parameter::text(parameter.name(), parameter.value_text()))
    }
}
