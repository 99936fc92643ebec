//! Buffer pair and full-duplex byte pump tying the frame codec to a [`LinkDriver`].

use core::sync::atomic::{AtomicBool, Ordering};

use crate::buffer::Buffer;
use crate::constants::{DATA_SIZE_FIELD_INDEX, MIN_FRAME_SIZE, STX};
use crate::crc;
use crate::frame::{self, DecodeEvent};
use crate::link_driver::LinkDriver;
use crate::message::{ParsedMessage, MAX_PAYLOAD};
use byteorder::{BigEndian, ByteOrder};
use heapless::Vec;

/// Owns the receive/transmit buffer pair and the link driver, and implements the full-duplex byte
/// pump described in §2 and §4.3.
pub struct Transport<D: LinkDriver> {
    driver: D,
    rx: Buffer,
    tx: Buffer,
    /// Raised once a complete, length-consistent frame has been deposited in `rx`.
    ///
    /// `exchange_byte` only ever sets this (from what is conceptually the interrupt side);
    /// `parse_message` is the only thing that clears it (from the foreground side). An
    /// `AtomicBool` with acquire/release ordering gives the happens-before edge the concurrency
    /// model in the crate docs calls for, without needing a target-specific barrier.
    new_message: AtomicBool,
    wakeup_enabled: bool,
}

impl<D: LinkDriver> Transport<D> {
    /// Wraps a link driver in a fresh transport with empty buffers.
    pub fn new(driver: D) -> Self {
        Transport {
            driver,
            rx: Buffer::new(),
            tx: Buffer::new(),
            new_message: AtomicBool::new(false),
            wakeup_enabled: false,
        }
    }

    /// Resets both buffers and brings the link driver up.
    pub fn begin(&mut self, wakeup_enabled: bool) {
        self.rx.reset();
        self.tx.reset();
        self.new_message.store(false, Ordering::Release);
        self.wakeup_enabled = wakeup_enabled;

        self.driver.init_io();
        self.driver.enable();
        self.driver.reset_radio();
    }

    /// Whether an outgoing frame is still being clocked out.
    ///
    /// Callers must check this before calling [`Transport::send_msg`] again; sending while a
    /// frame is in flight is undefined behavior by contract, not something this type prevents.
    pub fn has_message_to_send(&self) -> bool {
        !self.tx.is_empty()
    }

    /// Serializes a message into the transmit buffer and (optionally) wakes the radio.
    pub fn send_msg(&mut self, header: u8, message_type: u8, message_id: u8, payload: &[u8]) {
        self.tx.reset();
        self.tx.push(STX);

        let mut crc = crc::SEED;
        let prefix = [header, message_type, message_id, payload.len() as u8];
        for &byte in prefix.iter().chain(payload) {
            crc = crc::update(crc, byte);
            frame::encode_byte(&mut self.tx, byte);
        }
        frame::encode_byte(&mut self.tx, (crc >> 8) as u8);
        frame::encode_byte(&mut self.tx, crc as u8);

        trace!(
            "send_msg: header={:#04x} type={:#04x} id={:#04x} payload_len={}",
            header,
            message_type,
            message_id,
            payload.len()
        );

        if self.wakeup_enabled {
            self.driver.wakeup_radio();
        }
    }

    /// Pumps one byte in each direction, as described in §2 and §4.3.
    ///
    /// Intended to be called once per peer clock cycle, from whatever interrupt or asynchronous
    /// callback the link driver uses.
    pub fn exchange_byte(&mut self) {
        let tx_byte = self.tx.advance().unwrap_or(0);
        let rx_byte = self.driver.exchange_byte(tx_byte);

        if !self.tx.is_empty() && self.tx.cursor() == self.tx.len() {
            self.tx.reset();
        }

        match frame::decode_byte(&mut self.rx, rx_byte) {
            DecodeEvent::Resynced => warn!("rx buffer overflow, frame resynchronized"),
            _ => {}
        }

        let len = self.rx.len();
        if len >= MIN_FRAME_SIZE {
            let data_size = usize::from(self.rx.as_slice()[DATA_SIZE_FIELD_INDEX]);
            if len == data_size + MIN_FRAME_SIZE {
                self.new_message.store(true, Ordering::Release);
            }
        }
    }

    /// Peeks the "new message" flag without clearing it or touching the receive buffer.
    pub fn has_new_message(&self) -> bool {
        self.new_message.load(Ordering::Acquire)
    }

    /// Parses and CRC-checks the pending frame.
    ///
    /// Always clears the "new message" flag and the receive buffer, regardless of outcome (§4.3).
    /// Returns `None` on CRC mismatch or on a frame shorter than [`MIN_FRAME_SIZE`] (which should
    /// not occur given how the flag is raised, but is handled defensively).
    pub fn parse_message(&mut self) -> Option<ParsedMessage> {
        self.new_message.store(false, Ordering::Release);

        let raw = self.rx.as_slice();
        let len = raw.len();

        let result = if len < MIN_FRAME_SIZE {
            warn!("parse_message called with a short frame ({} bytes)", len);
            None
        } else {
            let received_crc = BigEndian::read_u16(&raw[len - 2..len]);
            let computed = crc::compute(&raw[1..len - 2]);
            if computed == received_crc {
                let mut payload: Vec<u8, MAX_PAYLOAD> = Vec::new();
                let _ = payload.extend_from_slice(&raw[5..len - 2]);
                trace!("parse_message: crc ok, header={:#04x}", raw[1]);
                Some(ParsedMessage {
                    header: raw[1],
                    message_type: raw[2],
                    message_id: raw[3],
                    payload,
                    crc: received_crc,
                })
            } else {
                warn!(
                    "parse_message: crc mismatch (received {:#06x}, computed {:#06x})",
                    received_crc, computed
                );
                None
            }
        };

        self.rx.reset();
        result
    }
}
