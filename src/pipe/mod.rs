//! Pipe transformers and their registry.
//!
//! A pipe is a named, configurable transformer applied to one parameter
//! variant, producing a Text parameter with the same name. Pipes are
//! resolved by name from a [`PipeRegistry`] built once from explicit
//! `(name, builder)` registrations; the built-in pipes are `text`,
//! `datetime`, `number`, and `boolean`.
//!
//! Pipe implementations must be stateless and pure: a configured pipe is
//! embedded in a compiled template and may be invoked concurrently from
//! any thread that binds the template.

mod args;
mod boolean;
mod datetime;
mod number;
mod registry;
mod text;

use thiserror::Error;

use crate::parameter::{Parameter, ParameterKind};

pub use args::PipeArgs;
pub use boolean::BooleanPipe;
pub use datetime::DateTimePipe;
pub use number::NumberPipe;
pub use registry::{
    builtin_registrations, BoxedPipe, PipeBuilder, PipeRegistration, PipeRegistry, RegistryError,
};
pub use text::TextPipe;

/// Transformation failure raised by a pipe at bind time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipeError {
    /// The pipe received a parameter variant it does not accept.
    #[error("parameter {name:?} is {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: ParameterKind,
        actual: ParameterKind,
    },
}

/// A configured value transformer applied to a bound parameter.
///
/// Implementations accept exactly one parameter variant and return a
/// Text parameter carrying the same name; any other variant must fail
/// with [`PipeError::TypeMismatch`] naming the parameter and both kinds.
/// This applies to custom pipes as much as to the built-ins — it is part
/// of the pipe contract, not an implementation detail.
pub trait Pipe: Send + Sync {
    /// Transform the input parameter into a Text parameter.
    fn transform(&self, parameter: &Parameter) -> Result<Parameter, PipeError>;
}

impl std::fmt::Debug for dyn Pipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pipe")
    }
}
