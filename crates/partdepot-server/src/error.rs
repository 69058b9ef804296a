//! Unified per-request error type.
//!
//! [`RequestError`] is what one connection's handling can fail with. Its
//! Display text becomes the wire-level error `message` verbatim, so the
//! variants stay transparent over the underlying errors.

use thiserror::Error;

use partdepot_proto::ProtocolError;
use partdepot_store::StoreError;

/// Any failure while serving one connection.
///
/// Every variant is answered as `{"status":"error","message":<Display>}`;
/// none of them take the server down.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Reading, decoding, or dispatching the request failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A SQL statement failed mid-action.
    #[error(transparent)]
    Store(#[from] StoreError),
}
