#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the packet codec: boundary field lengths, malformed
//! and truncated payloads, and decode behavior on hostile input.

use prism_protocol::config::{MAX_FIELD_LEN, MAX_USERNAME_LEN};
use prism_protocol::core::packet::{Packet, PacketType};
use prism_protocol::error::ProtocolError;

// ============================================================================
// ENCODING BOUNDARIES
// ============================================================================

#[test]
fn message_at_255_bytes_round_trips() {
    let message = vec![b'm'; MAX_FIELD_LEN];
    let mut p = Packet::outbound(PacketType::GeneralMessage);
    p.prep_general_message("bob", &message, true).unwrap();

    let mut rx = Packet::inbound(p.into_payload());
    rx.read_u8().unwrap();
    let n = rx.read_u8().unwrap() as usize;
    rx.read_string(n).unwrap();
    rx.read_bytes(21 - n).unwrap();
    assert!(rx.read_bool().unwrap());
    let m = rx.read_u8().unwrap() as usize;
    assert_eq!(m, MAX_FIELD_LEN);
    assert_eq!(rx.read_bytes(m).unwrap(), message.as_slice());
}

#[test]
fn message_at_256_bytes_is_rejected() {
    let mut p = Packet::outbound(PacketType::GeneralMessage);
    let err = p
        .prep_general_message("bob", &vec![b'm'; 256], false)
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::FieldTooLong {
            field: "message",
            len: 256,
            max: 255
        }
    ));
}

#[test]
fn username_at_exactly_20_bytes_keeps_flag_aligned() {
    let username = "u".repeat(MAX_USERNAME_LEN);
    let mut p = Packet::outbound(PacketType::GeneralMessage);
    p.prep_general_message(&username, b"x", true).unwrap();

    let mut rx = Packet::inbound(p.into_payload());
    rx.read_u8().unwrap();
    let n = rx.read_u8().unwrap() as usize;
    assert_eq!(n, 20);
    rx.read_string(n).unwrap();
    // One padding byte left in the 21-byte window
    assert_eq!(rx.read_bytes(1).unwrap(), [0]);
    assert!(rx.read_bool().unwrap());
}

#[test]
fn reason_over_255_bytes_is_rejected_before_writing() {
    let mut p = Packet::outbound(PacketType::ServerDisconnect);
    let err = p.prep_server_disconnect(2, &"r".repeat(256)).unwrap_err();
    assert!(matches!(err, ProtocolError::FieldTooLong { field: "reason", .. }));
    assert_eq!(p.payload(), [PacketType::ServerDisconnect.tag()]);
}

#[test]
fn welcome_with_one_oversized_name_leaves_buffer_untouched() {
    let long = "x".repeat(256);
    let mut p = Packet::outbound(PacketType::Welcome);
    let err = p.prep_welcome(["bob", long.as_str()]).unwrap_err();
    assert!(matches!(err, ProtocolError::FieldTooLong { .. }));
    // Validation runs over the whole roster before any field is written
    assert_eq!(p.payload(), [PacketType::Welcome.tag()]);
}

#[test]
fn empty_fields_are_legal() {
    let mut p = Packet::outbound(PacketType::Initial);
    p.prep_initial("").unwrap();
    assert_eq!(p.payload(), [1, 0]);

    let mut p = Packet::outbound(PacketType::GeneralMessage);
    p.prep_general_message("", b"", false).unwrap();
    let mut expected = vec![20u8, 0];
    expected.extend_from_slice(&[0u8; 21]);
    expected.extend_from_slice(&[0, 0]);
    assert_eq!(p.payload(), expected.as_slice());

    let mut p = Packet::outbound(PacketType::Welcome);
    p.prep_welcome(std::iter::empty::<&str>()).unwrap();
    assert_eq!(p.payload(), [2, 0]);
}

// ============================================================================
// DECODING HOSTILE INPUT
// ============================================================================

#[test]
fn length_byte_lying_about_remaining_bytes_fails_cleanly() {
    // Claims a 10-byte username but carries only 3 bytes
    let mut p = Packet::inbound(vec![1, 10, b'b', b'o', b'b']);
    p.read_u8().unwrap();
    let n = p.read_u8().unwrap() as usize;
    let err = p.read_string(n).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Truncated {
            needed: 10,
            remaining: 3,
            ..
        }
    ));
}

#[test]
fn decode_of_empty_inbound_packet_fails_on_first_read() {
    let mut p = Packet::inbound(Vec::new());
    assert!(matches!(
        p.read_u8().unwrap_err(),
        ProtocolError::Truncated { needed: 1, remaining: 0, .. }
    ));
}

#[test]
fn truncated_welcome_stops_at_the_missing_entry() {
    // Two clients declared, only one present
    let mut p = Packet::inbound(vec![2, 2, 3, b'b', b'o', b'b']);
    p.read_u8().unwrap();
    let count = p.read_u8().unwrap();
    assert_eq!(count, 2);

    let n = p.read_u8().unwrap() as usize;
    assert_eq!(p.read_string(n).unwrap(), "bob");

    assert!(p.read_u8().is_err());
}

#[test]
fn unknown_tag_is_reported_not_invented() {
    let p = Packet::inbound(vec![42, 1, 2]);
    assert_eq!(p.packet_type(), None);
    assert_eq!(PacketType::from_tag(42), None);
}

#[test]
fn cursor_never_moves_backwards() {
    let mut p = Packet::inbound(vec![1, 2, 3, 4]);
    let mut last = p.position();
    while p.remaining() > 0 {
        p.read_u8().unwrap();
        assert!(p.position() > last);
        last = p.position();
    }
    assert_eq!(last, 4);
}
