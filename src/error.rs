use core::fmt;

/// Errors returned by the protocol engine.
///
/// None of these are raised by normal radio traffic: framing errors, CRC mismatches and unknown
/// message classes/types are not protocol violations (see the error taxonomy in the crate docs)
/// and are handled silently by resynchronizing or ignoring the offending message. `Error` is only
/// returned when a caller asks for something the local attribute store cannot satisfy.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Unexpectedly reached the end of a write-data record while reading its value bytes.
    Eof,

    /// An attribute ID outside of the `1..=4` (analog) or `16..=19` (digital) ranges was
    /// requested.
    InvalidAttributeId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Eof => "end of buffer",
            Error::InvalidAttributeId => "attribute ID out of range",
        })
    }
}
