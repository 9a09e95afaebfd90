use std::fmt;

use serde::{Deserialize, Serialize};

/// How far a piece of state reaches through the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Owned and read by one component.
    SingleComponent,
    /// Shared by a handful of nearby components.
    FewComponents,
    /// Needed across the whole application.
    AppWide,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::SingleComponent => "single-component",
            Scope::FewComponents => "few-components",
            Scope::AppWide => "app-wide",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    const ALL: [Scope; 3] = [Scope::SingleComponent, Scope::FewComponents, Scope::AppWide];

    #[derive(Deserialize)]
    struct Holder {
        scope: Scope,
    }

    #[test]
    fn serde_and_cli_names_match_display() {
        for scope in ALL {
            let holder: Holder = toml::from_str(&format!("scope = \"{scope}\"")).unwrap();
            assert_eq!(holder.scope, scope);
            assert_eq!(Scope::from_str(scope.as_str(), false), Ok(scope));
        }
    }

    #[test]
    fn unknown_scope_is_rejected_everywhere() {
        assert!(toml::from_str::<Holder>("scope = \"global\"").is_err());
        assert!(Scope::from_str("global", false).is_err());
    }
}
