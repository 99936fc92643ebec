//! Protocol engine configuration trait.

use crate::link_driver::LinkDriver;

/// Trait tying a [`Protocol`](crate::protocol::Protocol) instance to a concrete link driver type.
///
/// Every application defines a (usually zero-sized) type implementing this trait and supplies it
/// as `Protocol`'s type parameter, rather than the protocol engine depending on any particular
/// MCU HAL or inheriting from a platform base class.
pub trait Config {
    /// The byte-link implementation (SPI, UART, ...) connecting to the radio.
    type LinkDriver: LinkDriver;
}
