//! Host-side protocol engine for the ISA100.11a radio's "Simple API".
//!
//! This crate implements framing, CRC validation, message dispatch and the local attribute store
//! for talking to the radio over a byte-oriented serial link (in the reference deployment, SPI
//! with the radio as bus master). It is runtime and hardware-agnostic: it does not open the link
//! itself, it drives a [`link_driver::LinkDriver`] implementation supplied by the integrator.
//!
//! # Using the crate
//!
//! An integrator implements [`LinkDriver`](link_driver::LinkDriver) for their platform's SPI (or
//! equivalent) peripheral, defines a (usually zero-sized) type implementing [`Config`](config::Config)
//! that names it, and builds a [`Protocol`](protocol::Protocol) around it:
//!
//! * The link driver's `exchange_byte` is called once per peer clock cycle, typically from an
//!   interrupt, driving [`Protocol::exchange_byte`](protocol::Protocol::exchange_byte).
//! * The foreground polls [`Protocol::has_new_message`](protocol::Protocol::has_new_message),
//!   parses and dispatches inbound frames, and calls the query/update methods to talk to the
//!   radio.
//!
//! This engine does not retransmit, does not fragment payloads larger than a single frame, and
//! keeps at most one outgoing and one incoming frame in flight at a time.

#![no_std]

#[macro_use]
mod utils;
#[macro_use]
mod log;
pub mod attributes;
mod buffer;
pub mod config;
pub mod constants;
mod crc;
mod dispatch;
mod error;
pub mod frame;
pub mod link_driver;
pub mod message;
pub mod properties;
pub mod protocol;
pub mod transport;

pub use self::error::Error;
