//! The public, application-facing API surface (§4.4, §6).

use crate::attributes::AttributeStore;
use crate::config::Config;
use crate::constants::{header, ApiCommandType, MessageClass};
use crate::dispatch;
use crate::message::ParsedMessage;
use crate::properties::RadioProperties;
use crate::transport::Transport;

/// Ties the transport, attribute store and properties cache together behind the operations the
/// application actually calls.
///
/// Generic over a [`Config`] rather than a concrete link driver type directly, so an integrator
/// names their platform once (as the `Config` impl) and every other part of the stack just reads
/// `C::LinkDriver` off it.
pub struct Protocol<C: Config> {
    transport: Transport<C::LinkDriver>,
    attributes: AttributeStore,
    properties: RadioProperties,
    /// `messageID` of the most recently parsed inbound frame; echoed by every host-initiated
    /// outbound message (§4.4, property 6).
    last_message_id: u8,
    /// Whether the last dispatched message was the radio's unsolicited poll (§4.5).
    last_message_was_poll: bool,
    /// The message [`Protocol::parse_message`] decoded, awaiting [`Protocol::handle_message`].
    pending: Option<ParsedMessage>,
}

impl<C: Config> Protocol<C> {
    /// Wraps a link driver in a fresh protocol instance.
    pub fn new(driver: C::LinkDriver) -> Self {
        Protocol {
            transport: Transport::new(driver),
            attributes: AttributeStore::new(),
            properties: RadioProperties::new(),
            last_message_id: 0,
            last_message_was_poll: false,
            pending: None,
        }
    }

    /// Resets the transport and brings the link driver up. Must be called once before any other
    /// operation.
    pub fn begin(&mut self, wakeup_enabled: bool) {
        self.transport.begin(wakeup_enabled);
    }

    /// Whether an outgoing frame is still being clocked out; callers must not call `send_msg`
    /// (indirectly, via any of the query/update methods) while this is true.
    pub fn has_message_to_send(&self) -> bool {
        self.transport.has_message_to_send()
    }

    /// Pumps one byte in each direction. Intended to be called once per peer clock cycle from
    /// whatever interrupt or asynchronous callback the link driver uses.
    pub fn exchange_byte(&mut self) {
        self.transport.exchange_byte();
    }

    /// Peeks the transport's "new message" flag.
    pub fn has_new_message(&self) -> bool {
        self.transport.has_new_message()
    }

    /// Parses the pending frame, updates `crc_valid` and the echoed message ID, and returns
    /// whether the CRC check passed. Dispatch is a separate step ([`Protocol::handle_message`]),
    /// matching the reference division between `parseMessage` and `handleMessage` (§4.4).
    pub fn parse_message(&mut self) -> bool {
        match self.transport.parse_message() {
            Some(msg) => {
                self.properties.crc_valid = true;
                self.last_message_id = msg.message_id;
                self.last_message_was_poll = dispatch::is_polling_message(&msg);
                self.pending = Some(msg);
                true
            }
            None => {
                self.properties.crc_valid = false;
                self.pending = None;
                false
            }
        }
    }

    /// Dispatches the most recently parsed message (attribute store updates, property cache
    /// updates, ACK generation). A no-op if the last [`Protocol::parse_message`] call failed or
    /// was never made.
    pub fn handle_message(&mut self) {
        if let Some(msg) = self.pending.take() {
            dispatch::handle(
                &mut self.transport,
                &mut self.attributes,
                &mut self.properties,
                &msg,
            );
        }
    }

    /// Whether the last successfully parsed message was the radio's unsolicited poll (§4.5, §6).
    pub fn received_polling_message(&self) -> bool {
        self.last_message_was_poll
    }

    /// Read-only access to the cached radio properties (hardware platform, firmware version,
    /// ...).
    pub fn properties(&self) -> &RadioProperties {
        &self.properties
    }

    /// Mutable access to the local attribute store.
    pub fn attributes(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    fn send_api_command(&mut self, message_type: u8, payload: &[u8]) {
        let header = header::build(u8::from(MessageClass::ApiCommand), false);
        self.transport
            .send_msg(header, message_type, self.last_message_id, payload);
    }

    /// Queries the radio's hardware platform code.
    pub fn get_hardware_platform(&mut self) {
        self.send_api_command(u8::from(ApiCommandType::HwPlatform), &[0]);
    }

    /// Queries the radio's firmware version.
    pub fn get_firmware_version(&mut self) {
        self.send_api_command(u8::from(ApiCommandType::FwVersion), &[0]);
    }

    /// Queries the radio's maximum frame buffer size.
    pub fn get_max_buffer_size(&mut self) {
        self.send_api_command(u8::from(ApiCommandType::MaxBuffer), &[0]);
    }

    /// Queries the radio's maximum SPI clock speed code.
    pub fn get_max_spi_speed(&mut self) {
        self.send_api_command(u8::from(ApiCommandType::MaxSpiSpeed), &[0]);
    }

    /// Requests the radio switch to a new SPI clock speed code. No response is expected (§4.5).
    pub fn update_spi_speed(&mut self, code: u8) {
        self.send_api_command(u8::from(ApiCommandType::UpdateSpiSpeed), &[code]);
    }

    /// Requests the radio switch to a new polling frequency code. No response is expected (§4.5).
    pub fn update_polling_frequency(&mut self, code: u8) {
        self.send_api_command(u8::from(ApiCommandType::UpdatePollingFreq), &[code]);
    }
}
