//! Message routing by class and type, and the side effects each message triggers (§4.5).

use crate::attributes::AttributeStore;
use crate::constants::{
    header, ApiCommandType, DataPassThroughType, MessageClass, ACK_DATA_RECEIVED,
};
use crate::link_driver::LinkDriver;
use crate::message::{ParsedMessage, MAX_PAYLOAD};
use crate::properties::RadioProperties;
use crate::transport::Transport;
use byteorder::{BigEndian, ByteOrder};
use heapless::Vec;

/// Dispatches a successfully parsed message to the attribute store or properties cache,
/// sending any response the message requires.
///
/// Unknown classes and unknown types within a known class fall through every `match` with no
/// effect, per §7's "unknown message class or type" error taxonomy entry -- `MessageClass` and
/// the per-class type enums are all [`enum_with_unknown`](crate::utils)-style closed-plus-unknown
/// enums, so there is no invalid byte value that could panic here.
pub fn handle<D: LinkDriver>(
    transport: &mut Transport<D>,
    attributes: &mut AttributeStore,
    properties: &mut RadioProperties,
    msg: &ParsedMessage,
) {
    match msg.class() {
        MessageClass::DataPassThrough => handle_data_pass_through(transport, attributes, msg),
        MessageClass::ApiCommand => handle_api_command(properties, msg),
        MessageClass::Ack => debug!("ACK received, id={:#04x}", msg.message_id),
        MessageClass::Nack => debug!("NACK received, id={:#04x}", msg.message_id),
        MessageClass::Unknown(class) => warn!("unknown message class {:#04x}, ignored", class),
    }
}

fn handle_data_pass_through<D: LinkDriver>(
    transport: &mut Transport<D>,
    attributes: &mut AttributeStore,
    msg: &ParsedMessage,
) {
    match DataPassThroughType::from(msg.message_type) {
        DataPassThroughType::WriteDataRequest => {
            for record in msg.payload().chunks(5) {
                if record.len() < 5 {
                    warn!("write-data-request payload not a multiple of 5 bytes, ignored tail");
                    break;
                }
                if attributes.apply_write_record(record).is_err() {
                    warn!(
                        "write-data-request named an out-of-range attribute id {:#04x}",
                        record[0]
                    );
                }
            }
            let ack_header = header::build(u8::from(MessageClass::Ack), true);
            transport.send_msg(ack_header, ACK_DATA_RECEIVED, msg.message_id, &[]);
        }
        DataPassThroughType::ReadDataRequest => {
            let mut response: Vec<u8, MAX_PAYLOAD> = Vec::new();
            for &id in msg.payload() {
                match attributes.read_record(id) {
                    Ok(record) => {
                        if response.extend_from_slice(&record).is_err() {
                            warn!("read-data-response payload would overflow a single frame");
                            break;
                        }
                    }
                    Err(_) => warn!(
                        "read-data-request named an out-of-range attribute id {:#04x}",
                        id
                    ),
                }
            }
            let resp_header = header::build(u8::from(MessageClass::DataPassThrough), true);
            transport.send_msg(
                resp_header,
                u8::from(DataPassThroughType::ReadDataResponse),
                msg.message_id,
                &response,
            );
        }
        DataPassThroughType::ReadDataResponse => {
            warn!("read-data-response received from radio, ignored (outbound-only type)");
        }
        DataPassThroughType::Unknown(ty) => {
            warn!("unknown data-pass-through type {:#04x}, ignored", ty);
        }
    }
}

fn handle_api_command(properties: &mut RadioProperties, msg: &ParsedMessage) {
    // The response bit only gates the four query responses below: POLLING is an unsolicited
    // radio-to-host notification and is recognized by type alone, since the radio sets the
    // response bit on it anyway, and the sent-only types have no reply to gate in the first
    // place.
    let payload = msg.payload();
    match ApiCommandType::from(msg.message_type) {
        ApiCommandType::HwPlatform if msg.is_response() => {
            if let Some(&platform) = payload.get(1) {
                properties.hardware_platform = platform;
            }
        }
        ApiCommandType::FwVersion if msg.is_response() => {
            if let Some(bytes) = payload.get(0..2) {
                properties.firmware_version = BigEndian::read_u16(bytes);
            }
        }
        ApiCommandType::MaxBuffer if msg.is_response() => {
            if let Some(bytes) = payload.get(0..2) {
                properties.max_buffer_size = BigEndian::read_u16(bytes);
            }
        }
        ApiCommandType::MaxSpiSpeed if msg.is_response() => {
            if let Some(&speed) = payload.first() {
                properties.max_spi_speed = speed;
            }
        }
        ApiCommandType::Polling => {
            debug!("poll message received, id={:#04x}", msg.message_id);
        }
        ApiCommandType::HwPlatform
        | ApiCommandType::FwVersion
        | ApiCommandType::MaxBuffer
        | ApiCommandType::MaxSpiSpeed
        | ApiCommandType::UpdateSpiSpeed
        | ApiCommandType::UpdatePollingFreq
        | ApiCommandType::FwActivationReq => {}
        ApiCommandType::Unknown(ty) => warn!("unknown API command type {:#04x}, ignored", ty),
    }
}

/// Whether `msg` is the radio-to-host poll message (§4.5, §6 `receivedPollingMessage`).
pub fn is_polling_message(msg: &ParsedMessage) -> bool {
    msg.class() == MessageClass::ApiCommand
        && matches!(ApiCommandType::from(msg.message_type), ApiCommandType::Polling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Transport;

    struct NullDriver;

    impl LinkDriver for NullDriver {
        fn init_io(&mut self) {}
        fn enable(&mut self) {}
        fn reset_radio(&mut self) {}
        fn wakeup_radio(&mut self) {}
        fn provision_radio(&mut self) {}
        fn exchange_byte(&mut self, _tx: u8) -> u8 {
            0
        }
    }

    /// Builds a `ParsedMessage` directly, bypassing the transport -- these tests exercise
    /// dispatch in isolation, the transport's own framing/CRC behavior is covered in its module.
    fn msg(header: u8, message_type: u8, message_id: u8, payload: &[u8]) -> ParsedMessage {
        let mut buf: Vec<u8, MAX_PAYLOAD> = Vec::new();
        buf.extend_from_slice(payload).unwrap();
        ParsedMessage {
            header,
            message_type,
            message_id,
            payload: buf,
            crc: 0,
        }
    }

    /// A write-data-request for a digital attribute flips the stored bit and queues an ACK.
    #[test]
    fn write_digital_request_updates_store_and_acks() {
        let mut transport = Transport::new(NullDriver);
        let mut attributes = AttributeStore::new();
        let mut properties = RadioProperties::new();

        let header = header::build(u8::from(MessageClass::DataPassThrough), false);
        let message = msg(
            header,
            u8::from(DataPassThroughType::WriteDataRequest),
            0x02,
            &[0x10, 0x00, 0x00, 0x00, 0x01],
        );

        handle(&mut transport, &mut attributes, &mut properties, &message);

        assert_eq!(attributes.read_record(0x10).unwrap()[4], 1);
        assert!(transport.has_message_to_send());
    }

    /// A write-data-request for an analog attribute, followed by a read back, reproduces the
    /// original wire bytes.
    #[test]
    fn write_then_read_analog_round_trips() {
        let mut transport = Transport::new(NullDriver);
        let mut attributes = AttributeStore::new();
        let mut properties = RadioProperties::new();

        let write_header = header::build(u8::from(MessageClass::DataPassThrough), false);
        let write = msg(
            write_header,
            u8::from(DataPassThroughType::WriteDataRequest),
            0x01,
            &[0x01, 0x41, 0x20, 0x00, 0x00],
        );
        handle(&mut transport, &mut attributes, &mut properties, &write);

        assert_eq!(
            attributes.read_record(0x01).unwrap(),
            [0x01, 0x41, 0x20, 0x00, 0x00]
        );
    }

    #[test]
    fn hw_platform_response_caches_second_payload_byte() {
        let mut properties = RadioProperties::new();
        let header = header::build(u8::from(MessageClass::ApiCommand), true);
        let message = msg(header, u8::from(ApiCommandType::HwPlatform), 0x00, &[0x00, 0x07]);
        handle_api_command(&mut properties, &message);
        assert_eq!(properties.hardware_platform, 0x07);
    }

    #[test]
    fn fw_version_response_caches_two_byte_big_endian_value() {
        let mut properties = RadioProperties::new();
        let header = header::build(u8::from(MessageClass::ApiCommand), true);
        let message = msg(header, u8::from(ApiCommandType::FwVersion), 0x00, &[0x01, 0x02]);
        handle_api_command(&mut properties, &message);
        assert_eq!(properties.firmware_version, 0x0102);
    }

    #[test]
    fn polling_message_is_recognized() {
        let header = header::build(u8::from(MessageClass::ApiCommand), false);
        let message = msg(header, u8::from(ApiCommandType::Polling), 0x07, &[]);
        assert!(is_polling_message(&message));
    }

    #[test]
    fn unknown_class_is_ignored_without_panicking() {
        let mut transport = Transport::new(NullDriver);
        let mut attributes = AttributeStore::new();
        let mut properties = RadioProperties::new();

        let header = header::build(0xA, false);
        let message = msg(header, 0x00, 0x00, &[]);
        handle(&mut transport, &mut attributes, &mut properties, &message);

        assert!(!transport.has_message_to_send());
    }
}
