//! Wire protocol shared by the partdepot server and client.
//!
//! One TCP connection carries exactly one JSON request and one JSON
//! response; the server closes the connection after writing. There is no
//! length prefix and no protocol version field -- a message simply has to
//! fit inside the fixed receive buffer.
//!
//! # Modules
//!
//! - [`error`]: ProtocolError enum with all wire-level failure modes
//! - [`request`]: per-action request structs and the `Request` dispatch enum
//! - [`response`]: `Response` and the five-column [`response::ItemRow`]
//! - [`wire`]: blocking read/write of one JSON object per direction

pub mod error;
pub mod request;
pub mod response;
pub mod wire;

// Re-export key types for ergonomic use.
pub use error::ProtocolError;
pub use request::{AddItem, DeleteItem, Request, SearchItem, UpdateItem};
pub use response::{ItemRow, Response};
pub use wire::{read_message, write_message, MAX_MESSAGE_BYTES};
