//! Descriptors: structured descriptions of state, events and read sites.
//!
//! Each descriptor comes in two forms:
//!
//! ```text
//! Raw (all fields optional, deserializable) ──TryFrom──→ Validated (immutable)
//! ```
//!
//! Every field is mandatory. Validation reports the first unset field and
//! never fills in a default.

mod access;
mod error;
mod event;
mod scope;
mod state;

pub use access::{AccessDescriptor, RawAccessDescriptor};
pub use error::{DescriptorError, DescriptorKind};
pub use event::{EventDescriptor, RawEventDescriptor};
pub use scope::Scope;
pub use state::{RawStateDescriptor, StateDescriptor};

/// Take a mandatory field out of a raw descriptor.
fn require<T>(value: Option<T>, kind: DescriptorKind, field: &'static str) -> Result<T, DescriptorError> {
    value.ok_or(DescriptorError::Missing { kind, field })
}
