//! # Frame Codec
//!
//! Tokio codec for length-prefixed packet framing over byte streams.
//!
//! Wraps any `AsyncRead + AsyncWrite` stream as
//! `Framed<S, PacketCodec>`, yielding whole [`Packet`]s and accepting them
//! for transmission. Partial input is buffered until a full frame arrives.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::config::{FRAME_HEADER_SIZE, MAX_FRAME_SIZE};
use crate::core::packet::Packet;
use crate::error::ProtocolError;

/// Codec for the `[Length(2, BE)] [Payload(N)]` wire frame
pub struct PacketCodec;

impl Encoder<Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, packet: Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let payload = packet.payload();
        if payload.len() > MAX_FRAME_SIZE {
            return Err(ProtocolError::OversizedFrame(payload.len()));
        }

        dst.reserve(FRAME_HEADER_SIZE + payload.len());
        dst.put_u16(payload.len() as u16);
        dst.put_slice(payload);
        trace!(bytes = payload.len(), "frame encoded");
        Ok(())
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>, Self::Error> {
        if src.len() < FRAME_HEADER_SIZE {
            return Ok(None);
        }

        let declared = u16::from_be_bytes([src[0], src[1]]) as usize;
        if src.len() < FRAME_HEADER_SIZE + declared {
            // Full frame not here yet; reserve what we know is coming
            src.reserve(FRAME_HEADER_SIZE + declared - src.len());
            return Ok(None);
        }

        src.advance(FRAME_HEADER_SIZE);
        let payload = src.split_to(declared);
        trace!(bytes = declared, "frame decoded");
        Ok(Some(Packet::inbound(payload.to_vec())))
    }
}
