//! Check manifests: batch classification for documentation linting.
//!
//! ```text
//! Manifest (TOML) → classify each entry → compare with `expect` → CheckReport
//! ```

mod manifest;
mod runner;

pub use manifest::{Entry, Manifest, ManifestError};
pub use runner::{run_check, CheckError, CheckOptions, CheckReport, EntryOutcome, Finding};
