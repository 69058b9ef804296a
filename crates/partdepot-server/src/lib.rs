//! TCP/JSON server for the partdepot inventory tracker.
//!
//! One accepted connection carries exactly one JSON request and one JSON
//! response; the server closes the connection afterward regardless of
//! outcome. Each connection gets its own OS thread; all threads share one
//! SQLite handle behind a mutex. This crate contains the accept loop, the
//! per-connection handler, shared state, and error mapping.

pub mod error;
pub mod handler;
pub mod server;
pub mod state;
