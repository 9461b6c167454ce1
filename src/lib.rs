//! Fair playback queue for group music sessions.
//!
//! Participants join a session and submit songs; the queue plays everyone's
//! first song before anyone's second, earlier arrivals first, while songs the
//! group dragged into place stay where they were put.
//!
//! - [`queue::rebalance`] recomputes the queue from a snapshot.
//! - [`session::Session`] holds the snapshot and the mutations that drive it.
//! - [`script`] replays a TOML log of mutations.

pub mod config;
pub mod queue;
pub mod runtime;
pub mod script;
pub mod session;
