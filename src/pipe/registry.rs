//! Pipe registry: name → builder resolution.

use std::collections::HashMap;

use thiserror::Error;

use super::args::PipeArgs;
use super::{BooleanPipe, DateTimePipe, NumberPipe, Pipe, TextPipe};

/// A configured pipe instance ready to embed in a compiled template
pub type BoxedPipe = Box<dyn Pipe>;

/// Builder function turning raw pipe arguments into a configured pipe.
///
/// The builder performs its own typed argument extraction: keys are
/// matched case-insensitively, absent arguments fall back to defaults,
/// and an unconvertible value fails with
/// [`RegistryError::ArgumentConversion`].
pub type PipeBuilder = Box<dyn Fn(&PipeArgs) -> Result<BoxedPipe, RegistryError> + Send + Sync>;

/// Failure at registry construction or pipe resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Two registrations claimed the same pipe name.
    #[error("a pipe named {0:?} is already registered")]
    DuplicateRegistration(String),

    /// A template referenced a pipe name no registration claimed.
    #[error("no registered pipe with name {0:?}")]
    UnknownPipe(String),

    /// A supplied argument string could not convert to its declared type.
    #[error("pipe argument {argument:?} has invalid value {value:?}: {reason}")]
    ArgumentConversion {
        argument: String,
        value: String,
        reason: String,
    },
}

/// One pipe type offered to a registry: a unique name plus the single
/// builder that constructs configured instances of it.
pub struct PipeRegistration {
    name: String,
    builder: PipeBuilder,
}

impl PipeRegistration {
    /// Register a pipe under `name` with its builder function
    pub fn new<F>(name: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&PipeArgs) -> Result<BoxedPipe, RegistryError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            builder: Box::new(builder),
        }
    }

    /// The pipe name as referenced in placeholder syntax
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolves textual pipe names plus string-keyed arguments into
/// configured transformer instances.
///
/// Built once from a fixed collection of registrations; the name map is
/// read-only afterwards and safe to share across threads.
pub struct PipeRegistry {
    builders: HashMap<String, PipeBuilder>,
}

impl std::fmt::Debug for PipeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeRegistry")
            .field("pipes", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PipeRegistry {
    /// Build a registry from the given registrations.
    ///
    /// Fails fast on a duplicate pipe name; no partially-built registry
    /// is returned.
    pub fn new(registrations: Vec<PipeRegistration>) -> Result<Self, RegistryError> {
        let mut builders = HashMap::with_capacity(registrations.len());

        for registration in registrations {
            if builders.contains_key(&registration.name) {
                return Err(RegistryError::DuplicateRegistration(registration.name));
            }
            tracing::debug!(pipe = %registration.name, "registered pipe");
            builders.insert(registration.name, registration.builder);
        }

        Ok(Self { builders })
    }

    /// A registry holding the built-in pipes (`text`, `datetime`,
    /// `number`, `boolean`).
    pub fn with_builtins() -> Self {
        Self::new(builtin_registrations()).expect("builtin pipe names are unique")
    }

    /// Resolve a pipe name and arguments into a configured instance
    pub fn resolve(&self, name: &str, args: &PipeArgs) -> Result<BoxedPipe, RegistryError> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| RegistryError::UnknownPipe(name.to_string()))?;

        builder(args)
    }

    /// Whether a pipe name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered pipe names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}

/// Registrations for the built-in pipes
pub fn builtin_registrations() -> Vec<PipeRegistration> {
    vec![
        TextPipe::registration(),
        DateTimePipe::registration(),
        NumberPipe::registration(),
        BooleanPipe::registration(),
    ]
}
