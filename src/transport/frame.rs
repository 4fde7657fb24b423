//! # Whole-Frame I/O
//!
//! Direct send/receive of single frames over a stream connection.
//!
//! These functions work against any `AsyncRead`/`AsyncWrite` connection and
//! transfer exactly one frame per call, blocking the calling task until the
//! frame is complete or the connection fails. For a continuous packet
//! stream, wrap the connection in `Framed` with
//! [`PacketCodec`](crate::core::codec::PacketCodec) instead.
//!
//! Timeouts and cancellation are the caller's concern; impose deadlines on
//! the underlying connection if bounded waits are needed.

use bytes::{BufMut, BytesMut};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::config::{FRAME_HEADER_SIZE, MAX_FRAME_SIZE};
use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};

/// Send one packet as a single logical frame: 2-byte big-endian payload
/// length, then the payload.
///
/// Fails with [`ProtocolError::OversizedFrame`] if the payload cannot fit
/// behind the 16-bit length prefix. The codec's own 255-byte field limits
/// keep real packets far below this, so hitting it means a caller bypassed
/// the typed encoders.
pub async fn send_packet<W>(conn: &mut W, packet: &Packet) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let payload = packet.payload();
    if payload.len() > MAX_FRAME_SIZE {
        return Err(ProtocolError::OversizedFrame(payload.len()));
    }

    let mut frame = BytesMut::with_capacity(FRAME_HEADER_SIZE + payload.len());
    frame.put_u16(payload.len() as u16);
    frame.put_slice(payload);

    conn.write_all(&frame).await?;
    conn.flush().await?;
    trace!(bytes = payload.len(), "frame sent");
    Ok(())
}

/// Receive one whole frame and return it as an inbound packet, cursor at 0.
///
/// Reads exactly 2 header bytes, then exactly the declared payload length,
/// looping over short reads. A connection that closes mid-frame surfaces as
/// [`ProtocolError::ConnectionClosed`]; no partial packet is ever returned.
pub async fn read_packet<R>(conn: &mut R) -> Result<Packet>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; FRAME_HEADER_SIZE];
    conn.read_exact(&mut header).await.map_err(map_eof)?;
    let declared = u16::from_be_bytes(header) as usize;

    let mut payload = vec![0u8; declared];
    conn.read_exact(&mut payload).await.map_err(map_eof)?;

    trace!(bytes = declared, "frame received");
    Ok(Packet::inbound(payload))
}

/// An EOF inside a frame means the peer went away, not that our request was
/// malformed. Everything else stays an I/O error.
fn map_eof(e: io::Error) -> ProtocolError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        ProtocolError::ConnectionClosed
    } else {
        ProtocolError::Io(e)
    }
}
