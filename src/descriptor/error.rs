use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which descriptor family a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorKind {
    State,
    Event,
    Access,
}

impl DescriptorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::State => "state",
            DescriptorKind::Event => "event",
            DescriptorKind::Access => "access",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while validating a raw descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A mandatory field was left unset.
    #[error("Invalid descriptor: {kind} descriptor is missing required field '{field}'")]
    Missing {
        kind: DescriptorKind,
        field: &'static str,
    },
}

impl DescriptorError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            DescriptorError::Missing { field, .. } => field,
        }
    }
}
