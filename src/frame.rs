//! Byte-stuffing codec for the two reserved wire bytes ([`STX`] and [`CHX`]).
//!
//! The codec never sees the leading `STX` of a frame -- that byte is written raw by
//! [`crate::transport::Transport::send_msg`] and recognized raw by [`decode_byte`]'s
//! frame-start branch.

use crate::buffer::Buffer;
use crate::constants::{CHX, ESCAPED_CHX, ESCAPED_STX, STX};

/// Appends `byte` to `tx`, escaping it if it collides with a reserved wire byte.
///
/// This is the encoder half of §4.2: a literal `STX` becomes `CHX, 0x0E`, a literal `CHX` becomes
/// `CHX, 0x0D`, everything else passes through unchanged.
pub fn encode_byte(tx: &mut Buffer, byte: u8) {
    match byte {
        STX => {
            tx.push(CHX);
            tx.push(ESCAPED_STX);
        }
        CHX => {
            tx.push(CHX);
            tx.push(ESCAPED_CHX);
        }
        other => tx.push(other),
    }
}

/// Outcome of feeding one wire byte to [`decode_byte`], used for diagnostic logging by the
/// transport layer. Carries no information the caller needs to act on: every variant already
/// updated `rx` as required by §4.2.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// `CHX` was seen; the escape-pending flag was set and nothing was appended.
    EscapeStarted,
    /// A literal `STX` restarted the frame; `rx` now holds just that byte.
    FrameStart,
    /// The buffer was full when a non-`STX` byte arrived; `rx` was reset and now holds just that
    /// byte (a framing error, see §7).
    Resynced,
    /// An ordinary (possibly unescaped) byte was appended to `rx`.
    Appended,
}

/// Feeds one wire byte into the receive path, implementing the decoder state machine of §4.2.
///
/// `rx` is the receive [`Buffer`]; its `escape_pending` flag carries state across calls.
pub fn decode_byte(rx: &mut Buffer, byte: u8) -> DecodeEvent {
    if byte == CHX {
        rx.set_escape_pending(true);
        return DecodeEvent::EscapeStarted;
    }

    if byte == STX || rx.is_full() {
        rx.reset();
        rx.push(byte);
        return if byte == STX {
            DecodeEvent::FrameStart
        } else {
            DecodeEvent::Resynced
        };
    }

    if rx.escape_pending() {
        rx.set_escape_pending(false);
        let resolved = match byte {
            ESCAPED_STX => STX,
            ESCAPED_CHX => CHX,
            other => other,
        };
        rx.push(resolved);
        return DecodeEvent::Appended;
    }

    rx.push(byte);
    DecodeEvent::Appended
}
