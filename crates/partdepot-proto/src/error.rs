//! Wire-protocol error types.
//!
//! [`ProtocolError`] covers everything that can go wrong between the socket
//! and a decoded request: I/O failures, malformed JSON, oversized messages,
//! and requests that name no known action.

use thiserror::Error;

/// Errors produced while reading, writing, or decoding wire messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The request omitted `action` or named an unknown one.
    ///
    /// The Display text is part of the wire contract: clients receive it
    /// verbatim as the error `message`.
    #[error("Invalid action")]
    InvalidAction,

    /// The payload was not valid JSON or was missing a required field.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    /// Socket read or write failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A message filled the receive buffer without parsing as JSON.
    #[error("message exceeds {0} bytes")]
    MessageTooLarge(usize),

    /// The peer closed the connection before sending any bytes.
    #[error("connection closed before a complete message arrived")]
    ConnectionClosed,
}
