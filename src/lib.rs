//! Rule-based guidance for client-side state management.
//!
//! Given a description of a piece of state, an event, or a read site, the
//! engine recommends a strategy (local state, store slice, action object,
//! selector, middleware, ...) together with the trail of questions that led
//! there.
//!
//! ```
//! use storeguide::descriptor::{Scope, StateDescriptor};
//! use storeguide::engine::{classify_state, Strategy};
//!
//! let cart = StateDescriptor::new(Scope::AppWide, false, true, true, false);
//! let rec = classify_state(&cart);
//! assert_eq!(rec.strategy(), Strategy::GlobalSlice);
//! assert_eq!(rec.rule(), "state.global-scope");
//! ```

pub mod check;
pub mod config;
pub mod descriptor;
pub mod engine;
pub mod logging;
pub mod report;
