//! Blocking TCP framing: one JSON object per connection direction.
//!
//! There is no length prefix. The reader accumulates bytes into a fixed
//! buffer and returns as soon as they parse as a complete JSON value, so a
//! message must fit in [`MAX_MESSAGE_BYTES`]. The writer sends the encoded
//! object in one shot; closing the connection is the caller's business.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::Value;

use crate::error::ProtocolError;

/// Fixed receive-buffer size; messages that outgrow it are rejected.
pub const MAX_MESSAGE_BYTES: usize = 4096;

/// Reads one JSON value from `reader`.
///
/// Returns as soon as the accumulated bytes form a complete JSON value.
/// On EOF, whatever arrived must stand on its own; an empty stream is
/// reported as [`ProtocolError::ConnectionClosed`].
pub fn read_message<R: Read>(reader: &mut R) -> Result<Value, ProtocolError> {
    let mut buf = vec![0u8; MAX_MESSAGE_BYTES];
    let mut filled = 0;
    loop {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            if filled == 0 {
                return Err(ProtocolError::ConnectionClosed);
            }
            return Ok(serde_json::from_slice(&buf[..filled])?);
        }
        filled += n;
        match serde_json::from_slice(&buf[..filled]) {
            Ok(value) => return Ok(value),
            // A prefix of a longer message: keep reading.
            Err(e) if e.is_eof() => {
                if filled == buf.len() {
                    return Err(ProtocolError::MessageTooLarge(MAX_MESSAGE_BYTES));
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Serializes `message` and writes it to `writer` in one shot.
pub fn write_message<W: Write, T: Serialize>(
    writer: &mut W,
    message: &T,
) -> Result<(), ProtocolError> {
    let bytes = serde_json::to_vec(message)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
