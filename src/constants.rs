//! Wire-level constants and the message class/type enumerations.

/// Start-of-frame byte. Never appears unescaped inside a frame body.
pub const STX: u8 = 0xF1;

/// Escape byte. Introduces a 2-byte escape sequence for a literal [`STX`] or [`CHX`] in the body.
pub const CHX: u8 = 0xF2;

/// Tail byte of the escape sequence standing in for a literal [`STX`].
pub const ESCAPED_STX: u8 = 0x0E;

/// Tail byte of the escape sequence standing in for a literal [`CHX`].
pub const ESCAPED_CHX: u8 = 0x0D;

/// Capacity, in bytes, of the receive and transmit buffers. Matches the radio's own buffer size.
pub const BUFFER_CAPACITY: usize = 114;

/// Number of bytes in a frame excluding the payload: `STX` + header + type + id + size + 2 CRC
/// bytes.
pub const MIN_FRAME_SIZE: usize = 7;

/// Offset of the `dataSize` field within the raw receive buffer (`STX`, header, type, id, size,
/// ...).
pub const DATA_SIZE_FIELD_INDEX: usize = 4;

enum_with_unknown! {
    /// The high nibble of a frame's `header` byte.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum MessageClass(u8) {
        /// Attribute reads and writes between host and radio.
        DataPassThrough = 0x1,
        /// Configuration queries and commands.
        ApiCommand = 0x4,
        /// Positive acknowledgement.
        Ack = 0x5,
        /// Negative acknowledgement.
        Nack = 0x6,
    }
}

enum_with_unknown! {
    /// `messageType` values within the [`MessageClass::DataPassThrough`] class.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum DataPassThroughType(u8) {
        WriteDataRequest = 1,
        ReadDataRequest = 2,
        ReadDataResponse = 3,
    }
}

enum_with_unknown! {
    /// `messageType` values within the [`MessageClass::ApiCommand`] class.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum ApiCommandType(u8) {
        HwPlatform = 1,
        FwVersion = 2,
        MaxBuffer = 3,
        MaxSpiSpeed = 4,
        UpdateSpiSpeed = 5,
        UpdatePollingFreq = 8,
        Polling = 9,
        FwActivationReq = 10,
    }
}

/// `messageType` used for the zero-payload ACK sent after a write-data request.
pub const ACK_DATA_RECEIVED: u8 = 1;

/// Header nibble/flag helpers.
///
/// The header byte layout is `[class:4][request_response:1][reserved:3]`. `class` is one of
/// [`MessageClass`]'s discriminants, `request_response` is 0 for a request and 1 for a response,
/// and the low 3 bits are always sent as 0 and ignored on receive (§9, open question 2).
pub mod header {
    use super::MessageClass;

    /// Builds a raw header byte from a class and request/response flag.
    pub const fn build(class: u8, is_response: bool) -> u8 {
        (class << 4) | ((is_response as u8) << 3)
    }

    /// Extracts the message class from a raw header byte.
    pub fn class(raw: u8) -> MessageClass {
        MessageClass::from(raw >> 4)
    }

    /// Extracts the request/response flag from a raw header byte.
    pub fn is_response(raw: u8) -> bool {
        raw & 0b1000 != 0
    }
}
