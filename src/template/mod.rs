//! Compiled templates: token factory and parameter binding.
//!
//! A [`Template`] is the immutable compile result of a template string —
//! an ordered sequence of literal-text and placeholder tokens, each
//! placeholder carrying its configured pipe. Compiling once and binding
//! many times is the intended usage:
//!
//! ```ignore
//! let registry = PipeRegistry::with_builtins();
//! let template = Template::compile("Hello {{Name}}", &registry)?;
//!
//! let output = template.bind(&[Parameter::text("Name", Some("John".into()))])?;
//! assert_eq!(output, "Hello John");
//! ```
//!
//! Binding is all-or-nothing: either the fully rendered string is
//! returned or an error is raised before any output is observable, and
//! the template stays reusable after a failed bind.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::parameter::Parameter;
use crate::parser::{parse_placeholder, split_tokens, ParseError};
use crate::pipe::{BoxedPipe, PipeError, PipeRegistry, RegistryError};

/// Compilation failure: a malformed placeholder or an unresolvable pipe.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Bind failure; the template itself remains valid and reusable.
#[derive(Debug, Error)]
pub enum BindError {
    /// The template references a parameter the caller did not supply.
    #[error("parameter {0:?} was not found")]
    MissingParameter(String),

    /// A pipe rejected the bound parameter's variant.
    #[error(transparent)]
    Pipe(#[from] PipeError),
}

/// The compiled unit of a template: literal text or a placeholder
/// reference with its optional configured pipe.
pub enum Token {
    /// Literal text rendered unchanged
    Text(String),
    /// A parameter reference, optionally transformed by a pipe
    Placeholder {
        parameter_name: String,
        pipe: Option<BoxedPipe>,
    },
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(literal) => f.debug_tuple("Text").field(literal).finish(),
            Token::Placeholder {
                parameter_name,
                pipe,
            } => f
                .debug_struct("Placeholder")
                .field("parameter_name", parameter_name)
                .field("has_pipe", &pipe.is_some())
                .finish(),
        }
    }
}

/// An immutable, reusable compiled template.
///
/// Safe to share across threads: binding allocates only call-local state
/// and pipes are stateless by contract.
#[derive(Debug)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Compile a template string against a pipe registry.
    ///
    /// Fails fast on the first malformed placeholder, unknown pipe name,
    /// or unconvertible pipe argument; no partial template is returned.
    pub fn compile(template: &str, registry: &PipeRegistry) -> Result<Self, TemplateError> {
        let tokens = split_tokens(template)
            .iter()
            .map(|token| create_token(token, registry))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(tokens = tokens.len(), "template compiled");

        Ok(Self { tokens })
    }

    /// The compiled token sequence, in template order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Bind parameters to the template and render the output string.
    ///
    /// Duplicate parameter names: the last one supplied wins. A
    /// referenced parameter missing from the collection, or a pipe
    /// rejecting its parameter's variant, aborts the whole bind — no
    /// partial output is observable.
    pub fn bind(&self, parameters: &[Parameter]) -> Result<String, BindError> {
        let lookup: HashMap<&str, &Parameter> = parameters
            .iter()
            .map(|parameter| (parameter.name(), parameter))
            .collect();

        let mut output = String::new();

        for token in &self.tokens {
            match token {
                Token::Text(literal) => output.push_str(literal),
                Token::Placeholder {
                    parameter_name,
                    pipe,
                } => {
                    let parameter = lookup
                        .get(parameter_name.as_str())
                        .ok_or_else(|| BindError::MissingParameter(parameter_name.clone()))?;

                    match pipe {
                        Some(pipe) => output.push_str(&pipe.transform(parameter)?.to_text()),
                        None => output.push_str(&parameter.to_text()),
                    }
                }
            }
        }

        Ok(output)
    }
}

fn create_token(token: &str, registry: &PipeRegistry) -> Result<Token, TemplateError> {
    if !is_placeholder(token) {
        return Ok(Token::Text(token.to_string()));
    }

    let spec = parse_placeholder(token)?;
    let pipe = spec
        .pipe
        .map(|pipe| registry.resolve(&pipe.name, &pipe.args))
        .transpose()?;

    Ok(Token::Placeholder {
        parameter_name: spec.parameter_name,
        pipe,
    })
}

fn is_placeholder(token: &str) -> bool {
    token.starts_with("{{") && token.ends_with("}}")
}
