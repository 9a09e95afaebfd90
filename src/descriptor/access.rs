use serde::{Deserialize, Serialize};

use super::{require, DescriptorError, DescriptorKind};

/// Access descriptor as read from flags or a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawAccessDescriptor {
    #[serde(alias = "accessed_from_multiple_components")]
    pub accessed_from_multiple_components: Option<bool>,
    #[serde(alias = "requires_computation")]
    pub requires_computation: Option<bool>,
    #[serde(alias = "shape_may_change")]
    pub shape_may_change: Option<bool>,
    #[serde(alias = "is_deeply_nested")]
    pub is_deeply_nested: Option<bool>,
}

/// A fully specified state-read site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccessDescriptor {
    accessed_from_multiple_components: bool,
    requires_computation: bool,
    shape_may_change: bool,
    is_deeply_nested: bool,
}

impl AccessDescriptor {
    pub fn new(
        accessed_from_multiple_components: bool,
        requires_computation: bool,
        shape_may_change: bool,
        is_deeply_nested: bool,
    ) -> Self {
        Self {
            accessed_from_multiple_components,
            requires_computation,
            shape_may_change,
            is_deeply_nested,
        }
    }

    pub fn accessed_from_multiple_components(&self) -> bool {
        self.accessed_from_multiple_components
    }

    /// Whether the read derives a value (filtering, sorting, totals) instead of returning it as stored.
    pub fn requires_computation(&self) -> bool {
        self.requires_computation
    }

    pub fn shape_may_change(&self) -> bool {
        self.shape_may_change
    }

    pub fn is_deeply_nested(&self) -> bool {
        self.is_deeply_nested
    }
}

impl TryFrom<RawAccessDescriptor> for AccessDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawAccessDescriptor) -> Result<Self, Self::Error> {
        const KIND: DescriptorKind = DescriptorKind::Access;
        Ok(Self {
            accessed_from_multiple_components: require(
                raw.accessed_from_multiple_components,
                KIND,
                "accessed-from-multiple-components",
            )?,
            requires_computation: require(raw.requires_computation, KIND, "requires-computation")?,
            shape_may_change: require(raw.shape_may_change, KIND, "shape-may-change")?,
            is_deeply_nested: require(raw.is_deeply_nested, KIND, "is-deeply-nested")?,
        })
    }
}

impl From<AccessDescriptor> for RawAccessDescriptor {
    fn from(d: AccessDescriptor) -> Self {
        Self {
            accessed_from_multiple_components: Some(d.accessed_from_multiple_components),
            requires_computation: Some(d.requires_computation),
            shape_may_change: Some(d.shape_may_change),
            is_deeply_nested: Some(d.is_deeply_nested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_nesting_flag_is_rejected() {
        let raw = RawAccessDescriptor {
            is_deeply_nested: None,
            ..RawAccessDescriptor::from(AccessDescriptor::new(false, false, false, false))
        };
        let err = AccessDescriptor::try_from(raw).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::Missing {
                kind: DescriptorKind::Access,
                field: "is-deeply-nested"
            }
        );
    }
}
