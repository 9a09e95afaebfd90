use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::{RawAccessDescriptor, RawEventDescriptor, RawStateDescriptor, Scope};
use crate::engine::Strategy;

/// Errors that can occur when loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A named descriptor with an optional pinned strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<R> {
    pub name: String,
    /// Strategy the documentation claims for this entry.
    pub expect: Option<Strategy>,
    pub descriptor: R,
}

/// Descriptors to check, grouped by kind. Entries are checked in file order.
///
/// Unknown sections and unknown entry keys are parse errors, so a misspelled
/// `expect` or descriptor field can never pass silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ManifestFile")]
pub struct Manifest {
    pub state: Vec<Entry<RawStateDescriptor>>,
    pub event: Vec<Entry<RawEventDescriptor>>,
    pub access: Vec<Entry<RawAccessDescriptor>>,
}

// On-disk layout. Entry keys are spelled out per kind so that
// `deny_unknown_fields` applies to every key of an entry.

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    state: Vec<StateEntry>,
    #[serde(default)]
    event: Vec<EventEntry>,
    #[serde(default)]
    access: Vec<AccessEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct StateEntry {
    name: String,
    expect: Option<Strategy>,
    scope: Option<Scope>,
    #[serde(alias = "growth_expectation")]
    growth_expectation: Option<bool>,
    #[serde(alias = "involves_async")]
    involves_async: Option<bool>,
    #[serde(alias = "reused_across_features")]
    reused_across_features: Option<bool>,
    #[serde(alias = "needs_persistence")]
    needs_persistence: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct EventEntry {
    name: String,
    expect: Option<Strategy>,
    #[serde(alias = "multiple_consumers")]
    multiple_consumers: Option<bool>,
    #[serde(alias = "has_side_effects")]
    has_side_effects: Option<bool>,
    #[serde(alias = "reusable_across_app")]
    reusable_across_app: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct AccessEntry {
    name: String,
    expect: Option<Strategy>,
    #[serde(alias = "accessed_from_multiple_components")]
    accessed_from_multiple_components: Option<bool>,
    #[serde(alias = "requires_computation")]
    requires_computation: Option<bool>,
    #[serde(alias = "shape_may_change")]
    shape_may_change: Option<bool>,
    #[serde(alias = "is_deeply_nested")]
    is_deeply_nested: Option<bool>,
}

impl From<StateEntry> for Entry<RawStateDescriptor> {
    fn from(e: StateEntry) -> Self {
        Self {
            name: e.name,
            expect: e.expect,
            descriptor: RawStateDescriptor {
                scope: e.scope,
                growth_expectation: e.growth_expectation,
                involves_async: e.involves_async,
                reused_across_features: e.reused_across_features,
                needs_persistence: e.needs_persistence,
            },
        }
    }
}

impl From<EventEntry> for Entry<RawEventDescriptor> {
    fn from(e: EventEntry) -> Self {
        Self {
            name: e.name,
            expect: e.expect,
            descriptor: RawEventDescriptor {
                multiple_consumers: e.multiple_consumers,
                has_side_effects: e.has_side_effects,
                reusable_across_app: e.reusable_across_app,
            },
        }
    }
}

impl From<AccessEntry> for Entry<RawAccessDescriptor> {
    fn from(e: AccessEntry) -> Self {
        Self {
            name: e.name,
            expect: e.expect,
            descriptor: RawAccessDescriptor {
                accessed_from_multiple_components: e.accessed_from_multiple_components,
                requires_computation: e.requires_computation,
                shape_may_change: e.shape_may_change,
                is_deeply_nested: e.is_deeply_nested,
            },
        }
    }
}

impl From<ManifestFile> for Manifest {
    fn from(file: ManifestFile) -> Self {
        Self {
            state: file.state.into_iter().map(Entry::from).collect(),
            event: file.event.into_iter().map(Entry::from).collect(),
            access: file.access.into_iter().map(Entry::from).collect(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.state.len() + self.event.len() + self.access.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let manifest = Manifest::parse(
            r#"
            [[state]]
            name = "cart"
            scope = "app-wide"
            growth-expectation = false
            involves-async = true
            reused-across-features = true
            needs-persistence = false
            expect = "global-slice"

            [[event]]
            name = "toggle-menu"
            multiple-consumers = false
            has-side-effects = false
            reusable-across-app = false

            [[access]]
            name = "visible-todos"
            accessed_from_multiple_components = true
            requires_computation = true
            shape_may_change = false
            is_deeply_nested = false
            "#,
        )
        .unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.state[0].name, "cart");
        assert_eq!(manifest.state[0].expect, Some(Strategy::GlobalSlice));
        assert_eq!(manifest.state[0].descriptor.scope, Some(Scope::AppWide));
        assert_eq!(manifest.event[0].expect, None);
        assert_eq!(
            manifest.access[0].descriptor.requires_computation,
            Some(true)
        );
    }

    #[test]
    fn missing_fields_stay_unset() {
        let manifest = Manifest::parse(
            r#"
            [[state]]
            name = "draft"
            growth-expectation = false
            "#,
        )
        .unwrap();
        assert_eq!(manifest.state[0].descriptor.scope, None);
        assert_eq!(manifest.state[0].descriptor.involves_async, None);
    }

    #[test]
    fn empty_manifest_is_valid() {
        assert!(Manifest::parse("").unwrap().is_empty());
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        let err = Manifest::parse(
            r#"
            [[event]]
            name = "x"
            expect = "redux"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn unknown_entry_key_is_a_parse_error() {
        let err = Manifest::parse(
            r#"
            [[event]]
            name = "x"
            multiple-consumers = false
            has-side-effects = false
            reusable-across-app = false
            expects = "middleware"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expects"));
    }

    #[test]
    fn unknown_section_is_a_parse_error() {
        assert!(Manifest::parse("[[events]]\nname = \"x\"\n").is_err());
    }
}
