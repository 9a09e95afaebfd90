use serde::{Deserialize, Serialize};

use crate::report::{OutputFormat, TrailMode};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

/// Defaults for how results are printed. CLI flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// "text" or "json" (default: text).
    #[serde(default)]
    pub format: OutputFormat,
    /// "full" or "decisive" (default: full).
    #[serde(default)]
    pub trail: TrailMode,
}

/// Settings for `check` runs over manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CheckConfig {
    /// Report entries that carry no `expect` strategy (default: false).
    #[serde(default)]
    pub require_expect: bool,
}
