//! The capability set a platform integration must provide.
//!
//! Everything here is "hardware" in the sense of §1's scope cut: SPI/GPIO configuration, pin
//! toggling, and the actual simultaneous byte transfer. None of it is implemented by this crate;
//! [`Transport`](crate::transport::Transport) is generic over a type implementing this trait
//! instead of reaching for a platform HAL directly or an inheritance chain of driver base
//! classes.
pub trait LinkDriver {
    /// Configures the wakeup, reset, provisioning and boot pins as outputs.
    ///
    /// Wakeup starts low; reset, provisioning and boot start high. Boot must be driven before
    /// reset so the radio selects the right firmware image at boot.
    fn init_io(&mut self);

    /// Configures the byte link itself (for SPI: mode 0, MSB-first, slave, interrupt on
    /// chip-select).
    fn enable(&mut self);

    /// Pulses the reset pin low for 2 ms, then high.
    fn reset_radio(&mut self);

    /// Pulses the wakeup pin high for 1-2 ms, then low.
    fn wakeup_radio(&mut self);

    /// Pulls the provisioning pin low for at least 10 seconds, then high.
    ///
    /// Deprecated on the radio side; kept only because some deployed firmware still requires it.
    fn provision_radio(&mut self);

    /// Transmits `tx` and returns the byte the peer clocked in at the same time.
    ///
    /// Called once per peer clock cycle, typically from an interrupt or equivalent asynchronous
    /// callback -- see the concurrency model in the crate docs.
    fn exchange_byte(&mut self, tx: u8) -> u8;
}
