use serde::{Deserialize, Serialize};

use super::{require, DescriptorError, DescriptorKind, Scope};

/// State descriptor as read from flags or a manifest. Any field may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawStateDescriptor {
    pub scope: Option<Scope>,
    #[serde(alias = "growth_expectation")]
    pub growth_expectation: Option<bool>,
    #[serde(alias = "involves_async")]
    pub involves_async: Option<bool>,
    #[serde(alias = "reused_across_features")]
    pub reused_across_features: Option<bool>,
    #[serde(alias = "needs_persistence")]
    pub needs_persistence: Option<bool>,
}

/// A fully specified candidate piece of application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StateDescriptor {
    scope: Scope,
    growth_expectation: bool,
    involves_async: bool,
    reused_across_features: bool,
    needs_persistence: bool,
}

impl StateDescriptor {
    pub fn new(
        scope: Scope,
        growth_expectation: bool,
        involves_async: bool,
        reused_across_features: bool,
        needs_persistence: bool,
    ) -> Self {
        Self {
            scope,
            growth_expectation,
            involves_async,
            reused_across_features,
            needs_persistence,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Whether the state is expected to grow in size or complexity.
    pub fn growth_expectation(&self) -> bool {
        self.growth_expectation
    }

    pub fn involves_async(&self) -> bool {
        self.involves_async
    }

    pub fn reused_across_features(&self) -> bool {
        self.reused_across_features
    }

    pub fn needs_persistence(&self) -> bool {
        self.needs_persistence
    }
}

impl TryFrom<RawStateDescriptor> for StateDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawStateDescriptor) -> Result<Self, Self::Error> {
        const KIND: DescriptorKind = DescriptorKind::State;
        Ok(Self {
            scope: require(raw.scope, KIND, "scope")?,
            growth_expectation: require(raw.growth_expectation, KIND, "growth-expectation")?,
            involves_async: require(raw.involves_async, KIND, "involves-async")?,
            reused_across_features: require(
                raw.reused_across_features,
                KIND,
                "reused-across-features",
            )?,
            needs_persistence: require(raw.needs_persistence, KIND, "needs-persistence")?,
        })
    }
}

impl From<StateDescriptor> for RawStateDescriptor {
    fn from(d: StateDescriptor) -> Self {
        Self {
            scope: Some(d.scope),
            growth_expectation: Some(d.growth_expectation),
            involves_async: Some(d.involves_async),
            reused_across_features: Some(d.reused_across_features),
            needs_persistence: Some(d.needs_persistence),
        }
    }
}
