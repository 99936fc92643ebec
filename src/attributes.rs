//! Local attribute store mirroring the radio's analog and digital I/O attributes.
//!
//! Attribute IDs `1..=4` address the four analog attributes, `16..=19` the four digital ones
//! (§4.6). Both ranges are kept as separate fixed-size arrays rather than one sparse map --
//! there are only eight attributes total and their IDs never change, so a `match`/index into a
//! small array is both the simplest and the cheapest representation.

use crate::error::Error;

/// Number of analog attributes (IDs `1..=4`).
pub const ANALOG_COUNT: usize = 4;

/// Number of digital attributes (IDs `16..=19`).
pub const DIGITAL_COUNT: usize = 4;

/// First analog attribute ID.
const ANALOG_BASE: u8 = 1;

/// First digital attribute ID.
const DIGITAL_BASE: u8 = 16;

/// The host-side mirror of the radio's eight I/O attributes.
///
/// Analog values are stored with their four wire bytes reversed: the wire's first data byte
/// (`v3`, the most significant) lands at local index 3, its last (`v0`) at local index 0. This
/// reproduces the radio's own storage layout rather than a byte order this crate would otherwise
/// choose -- reading an attribute back reverses the same four bytes a second time, which is what
/// restores the original wire order in a read-data response.
#[derive(Debug, Default)]
pub struct AttributeStore {
    analogs: [[u8; 4]; ANALOG_COUNT],
    digitals: [bool; DIGITAL_COUNT],
}

impl AttributeStore {
    /// Creates a store with every attribute zeroed/false.
    pub const fn new() -> Self {
        AttributeStore {
            analogs: [[0; 4]; ANALOG_COUNT],
            digitals: [false; DIGITAL_COUNT],
        }
    }

    fn analog_index(id: u8) -> Option<usize> {
        if (ANALOG_BASE..ANALOG_BASE + ANALOG_COUNT as u8).contains(&id) {
            Some((id - ANALOG_BASE) as usize)
        } else {
            None
        }
    }

    fn digital_index(id: u8) -> Option<usize> {
        if (DIGITAL_BASE..DIGITAL_BASE + DIGITAL_COUNT as u8).contains(&id) {
            Some((id - DIGITAL_BASE) as usize)
        } else {
            None
        }
    }

    /// Applies a write-data record: `record[0]` is the attribute ID, `record[1..5]` its four
    /// value bytes in wire order `[v3, v2, v1, v0]`.
    ///
    /// Analog records store all four bytes reversed (see the struct docs). Digital records only
    /// use the fourth value byte (`v0`, the LSB); any nonzero value there is `true`. Returns
    /// [`Error::InvalidAttributeId`] for an ID outside both ranges, per §4.6; the caller decides
    /// whether that is worth a NACK or a silent drop.
    pub fn apply_write_record(&mut self, record: &[u8]) -> Result<(), Error> {
        let id = *record.first().ok_or(Error::Eof)?;

        if let Some(idx) = Self::analog_index(id) {
            let bytes = record.get(1..5).ok_or(Error::Eof)?;
            for (i, &b) in bytes.iter().enumerate() {
                self.analogs[idx][3 - i] = b;
            }
            return Ok(());
        }

        if let Some(idx) = Self::digital_index(id) {
            let byte = *record.get(4).ok_or(Error::Eof)?;
            self.digitals[idx] = byte != 0;
            return Ok(());
        }

        Err(Error::InvalidAttributeId)
    }

    /// Builds a read-data response record for `id`: `[id, value bytes...]`.
    ///
    /// Analog responses reverse the stored 4 bytes a second time, which restores the original
    /// wire order they were written in. Digital responses are `[id, 0, 0, 0, value]`, matching
    /// the radio's own read-response padding for a single-byte attribute.
    pub fn read_record(&self, id: u8) -> Result<[u8; 5], Error> {
        if let Some(idx) = Self::analog_index(id) {
            let v = self.analogs[idx];
            return Ok([id, v[3], v[2], v[1], v[0]]);
        }

        if let Some(idx) = Self::digital_index(id) {
            let v = self.digitals[idx] as u8;
            return Ok([id, 0, 0, 0, v]);
        }

        Err(Error::InvalidAttributeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writing any analog attribute then reading it back reproduces the same wire bytes, even
    /// though the local representation in between is byte-reversed.
    #[test]
    fn analog_write_then_read_round_trips() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x01, 0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(store.read_record(0x01).unwrap(), [0x01, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    /// Writing analog attribute 1 with value bytes `41 20 00 00` stores them reversed.
    #[test]
    fn analog_write_stores_value_bytes_reversed() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x01, 0x41, 0x20, 0x00, 0x00]).unwrap();
        assert_eq!(store.analogs[0], [0x00, 0x00, 0x20, 0x41]);
    }

    /// Reading an analog attribute back after a write reproduces the original wire payload.
    #[test]
    fn analog_read_after_write_round_trips() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x01, 0x41, 0x20, 0x00, 0x00]).unwrap();
        assert_eq!(store.read_record(0x01).unwrap(), [0x01, 0x41, 0x20, 0x00, 0x00]);
    }

    /// A digital write takes its value from the fourth value byte (the LSB), not the first.
    #[test]
    fn digital_write_then_read_round_trips() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x10, 0x00, 0x00, 0x00, 0x01]).unwrap();
        assert_eq!(store.read_record(0x10).unwrap(), [0x10, 0, 0, 0, 1]);
    }

    /// Any nonzero digital write value is normalized to exactly `1` on read.
    #[test]
    fn digital_write_normalizes_nonzero_values() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x13, 0x00, 0x00, 0x00, 0xFF]).unwrap();
        assert_eq!(store.read_record(0x13).unwrap(), [0x13, 0, 0, 0, 1]);
    }

    /// A digital write whose LSB is zero but whose other value bytes are nonzero still reads
    /// back as `false` -- only `record[4]` is ever consulted.
    #[test]
    fn digital_write_ignores_non_lsb_value_bytes() {
        let mut store = AttributeStore::new();
        store.apply_write_record(&[0x10, 0xFF, 0xFF, 0xFF, 0x00]).unwrap();
        assert_eq!(store.read_record(0x10).unwrap(), [0x10, 0, 0, 0, 0]);
    }

    #[test]
    fn unwritten_attributes_read_as_zero() {
        let store = AttributeStore::new();
        assert_eq!(store.read_record(0x02).unwrap(), [0x02, 0, 0, 0, 0]);
        assert_eq!(store.read_record(0x11).unwrap(), [0x11, 0, 0, 0, 0]);
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        let mut store = AttributeStore::new();
        assert_eq!(
            store.apply_write_record(&[0x05, 0, 0, 0, 0]),
            Err(Error::InvalidAttributeId)
        );
        assert_eq!(store.read_record(0x20), Err(Error::InvalidAttributeId));
    }

    #[test]
    fn truncated_write_record_is_an_eof_error() {
        let mut store = AttributeStore::new();
        assert_eq!(store.apply_write_record(&[0x01, 0xDE]), Err(Error::Eof));
        assert_eq!(store.apply_write_record(&[0x10, 0x00]), Err(Error::Eof));
        assert_eq!(store.apply_write_record(&[]), Err(Error::Eof));
    }
}
