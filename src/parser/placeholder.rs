//! Placeholder grammar parsing.
//!
//! Grammar: `{{` WS name WS ( `|` pipe ( `:` key`=`value (`,`key`=`value)* )? )? WS `}}`.
//!
//! There is no escaping grammar for `,`, `=`, `|`, or `:` inside
//! argument values; text after a second `|` is ignored. Both behaviors
//! are deliberate limitations of the placeholder syntax.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipe::PipeArgs;

/// Parse failure for a single placeholder, carrying the offending text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid placeholder {placeholder:?}: blank parameter name")]
    BlankParameterName { placeholder: String },

    #[error("invalid placeholder {placeholder:?}: argument pair missing '=value'")]
    MalformedArguments { placeholder: String },
}

/// Parse result of one placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    /// The referenced parameter name (e.g. `FirstName` from `{{FirstName}}`)
    pub parameter_name: String,

    /// Pipe specification, if the placeholder names one
    pub pipe: Option<PipeSpec>,
}

/// Pipe name and arguments extracted from a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    /// The pipe name (e.g. `datetime`, `number`, `boolean`)
    pub name: String,

    /// Ordered `key=value` arguments from the placeholder syntax
    pub args: PipeArgs,
}

/// Parse a placeholder like `{{Name|pipe:key=value}}` into its parts.
///
/// The surrounding `{{`/`}}` and outer whitespace are stripped, the
/// parameter name and pipe segment are trimmed; argument keys and values
/// are taken verbatim. A blank parameter name or an argument pair
/// missing its `=value` fails the whole placeholder.
pub fn parse_placeholder(placeholder: &str) -> Result<PlaceholderSpec, ParseError> {
    let trimmed = placeholder.trim();
    let inner = trimmed.strip_prefix("{{").unwrap_or(trimmed);
    let inner = inner.strip_suffix("}}").unwrap_or(inner);

    let mut segments = inner.split('|');

    let parameter_name = segments.next().unwrap_or("").trim();
    if parameter_name.is_empty() {
        return Err(ParseError::BlankParameterName {
            placeholder: placeholder.to_string(),
        });
    }

    // Segments past the second carry no meaning and are ignored.
    let pipe = segments
        .next()
        .map(|segment| parse_pipe_segment(segment.trim(), placeholder))
        .transpose()?;

    Ok(PlaceholderSpec {
        parameter_name: parameter_name.to_string(),
        pipe,
    })
}

fn parse_pipe_segment(segment: &str, placeholder: &str) -> Result<PipeSpec, ParseError> {
    let (name, args_text) = match segment.split_once(':') {
        Some((name, rest)) => (name, Some(rest)),
        None => (segment, None),
    };

    let mut args = PipeArgs::new();

    if let Some(args_text) = args_text {
        let pieces: Vec<&str> = args_text
            .split(',')
            .flat_map(|pair| pair.split('='))
            .collect();

        if pieces.len() % 2 != 0 {
            return Err(ParseError::MalformedArguments {
                placeholder: placeholder.to_string(),
            });
        }

        for pair in pieces.chunks(2) {
            args.insert(pair[0], pair[1]);
        }
    }

    Ok(PipeSpec {
        name: name.to_string(),
        args,
    })
}
