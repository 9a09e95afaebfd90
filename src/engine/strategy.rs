use std::fmt;

use serde::{Deserialize, Serialize};

/// A state-management strategy the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plain component-local state.
    LocalState,
    /// Component-local state driven by a local reducer.
    LocalReducer,
    /// A named slice of the central store.
    GlobalSlice,
    /// An action object shared by the components of one feature.
    SharedAction,
    /// An action object dispatched from anywhere in the app.
    GlobalAction,
    /// Handle the event where it happens; no action object.
    LocalHandling,
    /// A derivation function over stored state.
    Selector,
    /// Read the stored value directly.
    DirectAccess,
    /// Logic between dispatch and state update for async or side-effecting work.
    Middleware,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::LocalState => "local-state",
            Strategy::LocalReducer => "local-reducer",
            Strategy::GlobalSlice => "global-slice",
            Strategy::SharedAction => "shared-action",
            Strategy::GlobalAction => "global-action",
            Strategy::LocalHandling => "local-handling",
            Strategy::Selector => "selector",
            Strategy::DirectAccess => "direct-access",
            Strategy::Middleware => "middleware",
        }
    }

    /// One-line guidance shown next to the strategy in text output.
    pub fn guidance(self) -> &'static str {
        match self {
            Strategy::LocalState => "keep it in the component's own state",
            Strategy::LocalReducer => "manage it with a reducer local to the component subtree",
            Strategy::GlobalSlice => "give it a named slice of the central store",
            Strategy::SharedAction => "define an action shared by the feature's components",
            Strategy::GlobalAction => "define an app-wide action consumed by reducers",
            Strategy::LocalHandling => "handle it in place; no action object is required",
            Strategy::Selector => "read it through a selector",
            Strategy::DirectAccess => "read the stored value directly",
            Strategy::Middleware => "route it through async middleware (thunk)",
        }
    }

    /// Whether this strategy implies dispatching an action object.
    pub fn needs_action_object(self) -> bool {
        matches!(
            self,
            Strategy::SharedAction | Strategy::GlobalAction | Strategy::Middleware
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
