//! Publication Search Client Library
//!
//! This library crate implements the interactive client for the research
//! publications search service. It owns the full query lifecycle on the client
//! side: debounced triggering, request/response sequencing, pagination, and
//! local re-sorting, plus the companion text-classification flow.
//!
//! ## Architecture Modules
//! The client is composed of four loosely coupled subsystems:
//!
//! - **`client`**: The HTTP layer. Request executors for the search,
//!   classification, and model-info endpoints, and the wire types they decode.
//! - **`session`**: The core interaction logic. The search session controller
//!   (state machine), the debounce timer, the pagination window, and the local
//!   sort engine.
//! - **`classify`**: The text-classification flow. A simpler single
//!   request/response controller with local input validation.
//! - **`config`** / **`error`**: Injected configuration and the error taxonomy
//!   shared by the layers above.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
