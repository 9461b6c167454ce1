//! Session model and mutation layer.
//!
//! Songs and participants live in a [`Session`] snapshot; every mutation
//! returns a new snapshot whose queue has been rebalanced.

mod display;
mod error;
mod model;
mod state;

pub use display::{display_from_fields, queue_lines};
pub use error::SessionError;
pub use model::*;
pub use state::Session;
