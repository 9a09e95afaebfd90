use serde::{Deserialize, Serialize};

use super::{require, DescriptorError, DescriptorKind};

/// Event descriptor as read from flags or a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawEventDescriptor {
    #[serde(alias = "multiple_consumers")]
    pub multiple_consumers: Option<bool>,
    #[serde(alias = "has_side_effects")]
    pub has_side_effects: Option<bool>,
    #[serde(alias = "reusable_across_app")]
    pub reusable_across_app: Option<bool>,
}

/// A fully specified candidate action or application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EventDescriptor {
    multiple_consumers: bool,
    has_side_effects: bool,
    reusable_across_app: bool,
}

impl EventDescriptor {
    pub fn new(multiple_consumers: bool, has_side_effects: bool, reusable_across_app: bool) -> Self {
        Self {
            multiple_consumers,
            has_side_effects,
            reusable_across_app,
        }
    }

    pub fn multiple_consumers(&self) -> bool {
        self.multiple_consumers
    }

    /// Whether handling the event performs I/O or other async work.
    pub fn has_side_effects(&self) -> bool {
        self.has_side_effects
    }

    pub fn reusable_across_app(&self) -> bool {
        self.reusable_across_app
    }
}

impl TryFrom<RawEventDescriptor> for EventDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawEventDescriptor) -> Result<Self, Self::Error> {
        const KIND: DescriptorKind = DescriptorKind::Event;
        Ok(Self {
            multiple_consumers: require(raw.multiple_consumers, KIND, "multiple-consumers")?,
            has_side_effects: require(raw.has_side_effects, KIND, "has-side-effects")?,
            reusable_across_app: require(raw.reusable_across_app, KIND, "reusable-across-app")?,
        })
    }
}

impl From<EventDescriptor> for RawEventDescriptor {
    fn from(d: EventDescriptor) -> Self {
        Self {
            multiple_consumers: Some(d.multiple_consumers),
            has_side_effects: Some(d.has_side_effects),
            reusable_across_app: Some(d.reusable_across_app),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_side_effects_is_rejected() {
        let raw = RawEventDescriptor {
            multiple_consumers: Some(true),
            has_side_effects: None,
            reusable_across_app: Some(false),
        };
        let err = EventDescriptor::try_from(raw).unwrap_err();
        assert_eq!(err.field(), "has-side-effects");
        assert!(err.to_string().contains("event descriptor"));
    }

    #[test]
    fn roundtrips_through_raw() {
        let d = EventDescriptor::new(true, false, true);
        assert_eq!(EventDescriptor::try_from(RawEventDescriptor::from(d)), Ok(d));
    }
}
