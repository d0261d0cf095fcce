//! Icon resolution
//!
//! Turns an [`IconRequest`] into a [`Resolution`]: the catalog's asset set for
//! the requested name plus, when the selection rules allow it, the reference
//! of one asset from that set.
//!
//! Selection is a pure function of the asset set and the request
//! ([`select`]); [`IconResolver`] adds the asynchronous lifecycle around it.

mod handle;
mod request;
mod select;

pub use handle::{resolve, IconResolver};
pub use request::{IconRequest, Resolution, ResolutionState};
pub use select::{select, select_with_kind, Selection};
