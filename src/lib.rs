//! Micro template engine with typed parameters and pluggable pipes.
//!
//! Compiles a text string containing `{{Name}}` placeholders (optionally
//! `{{Name|pipe:arg=value,...}}`) into a reusable, immutable token
//! sequence, then binds that sequence against named, typed parameters to
//! produce an output string.
//!
//! # Example
//!
//! ```ignore
//! let registry = PipeRegistry::with_builtins();
//! let template = Template::compile(
//!     "Born: {{DateOfBirth|datetime:format=%Y-%m-%d}}, active: \
//!      {{IsActive|boolean:trueValue=Yes,falseValue=No}}",
//!     &registry,
//! )?;
//!
//! let output = template.bind(&[
//!     Parameter::date_time("DateOfBirth", Some(date_of_birth)),
//!     Parameter::boolean("IsActive", Some(true)),
//! ])?;
//! ```
//!
//! Registry construction and compilation run once, typically at startup;
//! a compiled [`Template`] is immutable and may be bound concurrently
//! from many threads.

// Value model
pub mod parameter;

// Parsing pipeline
pub mod parser;

// Pipe transformers and registry
pub mod pipe;

// Compiled templates and binding
pub mod template;

pub use parameter::{Parameter, ParameterKind};
pub use parser::{parse_placeholder, split_tokens, ParseError, PipeSpec, PlaceholderSpec};
pub use pipe::{
    builtin_registrations, BooleanPipe, BoxedPipe, DateTimePipe, NumberPipe, Pipe, PipeArgs,
    PipeBuilder, PipeError, PipeRegistration, PipeRegistry, RegistryError, TextPipe,
};
pub use template::{BindError, Template, TemplateError, Token};
