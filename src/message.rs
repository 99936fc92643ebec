//! The decoded message produced by a successful [`crate::transport::Transport::parse_message`].

use crate::constants::{header, MessageClass, BUFFER_CAPACITY, MIN_FRAME_SIZE};
use heapless::Vec;

/// Largest payload a single frame can carry, given the fixed 114-byte buffer and the 7 bytes of
/// framing overhead (`STX`, header, type, id, size, 2 CRC bytes).
pub const MAX_PAYLOAD: usize = BUFFER_CAPACITY - MIN_FRAME_SIZE;

/// A successfully CRC-checked inbound frame.
///
/// The payload is copied out of the receive buffer rather than borrowed from it (see the
/// "pointer-into-buffer payload view" design note): this lets `parse_message` clear the receive
/// buffer unconditionally before returning, matching the reference behavior, without fighting the
/// borrow checker over a buffer that is about to be reused.
#[derive(Debug, Clone)]
pub struct ParsedMessage {
    pub header: u8,
    pub message_type: u8,
    pub message_id: u8,
    pub payload: Vec<u8, MAX_PAYLOAD>,
    pub crc: u16,
}

impl ParsedMessage {
    /// The message class encoded in the high nibble of `header`.
    pub fn class(&self) -> MessageClass {
        header::class(self.header)
    }

    /// The request/response flag encoded in `header`.
    pub fn is_response(&self) -> bool {
        header::is_response(self.header)
    }

    /// Read-only view of the payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
