//! Text Classification Module
//!
//! The simpler sibling of the search session: one request, one response, no
//! debouncing, no pagination. Input is validated locally before any network
//! traffic, and the model-info query is best-effort background information
//! that never disturbs the classification state.

pub mod controller;


pub use controller::{ClassifierSession, ClassifyPhase};
