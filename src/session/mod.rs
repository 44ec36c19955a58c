//! Search Session Module
//!
//! The core of the client: everything with temporal or state complexity lives
//! here. A mounted search view owns exactly one [`SearchSession`]; the session
//! owns the debounce timer and the interest in the single in-flight request.
//!
//! ## Responsibilities
//! - **Lifecycle**: Query text vs committed (debounced) query, loading and
//!   error phases, page and sort state.
//! - **Sequencing**: Monotonic request tokens so that a stale response can
//!   never overwrite fresher results.
//! - **Pagination**: The bounded, ellipsis-compressed page window.
//! - **Sorting**: Stable in-memory re-ordering of the fetched page.
//!
//! ## Submodules
//! - **`controller`**: The state machine orchestrating everything below.
//! - **`debounce`**: Cancellable delayed commit of the live query.
//! - **`pagination`**: Pure derivation of the visible page strip.
//! - **`sort`**: The local sort engine and its key extraction.

pub mod controller;
pub mod debounce;
pub mod pagination;
pub mod sort;


pub use controller::{Phase, SearchSession, SessionEvent};
pub use pagination::{visible_pages, PageItem};
pub use sort::{SortDirection, SortField, SortSpec};
