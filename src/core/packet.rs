//! # Packet Format
//!
//! Typed binary packets for the Prism chat protocol.
//!
//! A [`Packet`] is a byte payload plus a read cursor. Outbound packets start
//! with their type tag and are populated by exactly one `prep_*` call;
//! inbound packets wrap bytes read off the wire and are consumed through the
//! sequential `read_*` primitives.
//!
//! ## Payload Layout
//! ```text
//! [Tag(1)] [Type-specific fields...]
//! ```
//! Every variable-length field is a 1-byte unsigned length followed by that
//! many raw bytes, so no field may exceed 255 bytes. Decoding is strictly
//! sequential: fields must be read in the exact order they were written, and
//! the cursor only moves forward.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_FIELD_LEN, MAX_USERNAME_LEN, USERNAME_FLAG_WINDOW};
use crate::error::{ProtocolError, Result};

/// Wire-level packet types. The numeric tags are transmitted as the first
/// payload byte and must match the peer's enumeration exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketType {
    /// First packet a client sends: its chosen username
    Initial = 1,
    /// Server reply listing the connected clients
    Welcome = 2,
    /// Server is dropping the connection, with a reason code and text
    ServerDisconnect = 3,
    /// Notification that another client joined
    ClientConnect = 5,
    /// Notification that another client left
    ClientDisconnect = 6,
    /// A chat message from one client, relayed to the rest
    GeneralMessage = 20,
}

impl PacketType {
    /// The numeric tag written as the first payload byte
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Recover the packet type from a leading payload byte
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(PacketType::Initial),
            2 => Some(PacketType::Welcome),
            3 => Some(PacketType::ServerDisconnect),
            5 => Some(PacketType::ClientConnect),
            6 => Some(PacketType::ClientDisconnect),
            20 => Some(PacketType::GeneralMessage),
            _ => None,
        }
    }
}

impl TryFrom<u8> for PacketType {
    type Error = ProtocolError;

    fn try_from(tag: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(ProtocolError::UnknownPacketType(tag))
    }
}

/// One protocol packet: an ordered byte payload and a monotonically
/// advancing read cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    payload: Vec<u8>,
    position: usize,
}

impl Packet {
    /// Start an outbound packet. The payload already contains the type tag;
    /// the caller populates the rest with one `prep_*` call.
    pub fn outbound(kind: PacketType) -> Self {
        Self {
            payload: vec![kind.tag()],
            position: 0,
        }
    }

    /// Wrap bytes freshly read off the wire, cursor at 0.
    pub fn inbound(payload: Vec<u8>) -> Self {
        Self {
            payload,
            position: 0,
        }
    }

    /// The full payload, including the type tag for outbound packets
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the packet, returning its payload
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Current read cursor offset
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the payload
    pub fn remaining(&self) -> usize {
        self.payload.len() - self.position
    }

    /// The packet type, if the leading payload byte carries a known tag
    pub fn packet_type(&self) -> Option<PacketType> {
        self.payload.first().and_then(|&tag| PacketType::from_tag(tag))
    }

    // ------------------------------------------------------------------
    // Encoders
    // ------------------------------------------------------------------

    /// Append one length-prefixed field. Rejects the value before touching
    /// the buffer if it cannot fit behind a 1-byte length.
    fn put_field(&mut self, field: &'static str, value: &[u8]) -> Result<()> {
        check_field(field, value, MAX_FIELD_LEN)?;
        self.payload.push(value.len() as u8);
        self.payload.extend_from_slice(value);
        Ok(())
    }

    /// Fields: `len(username):u8`, username bytes
    pub fn prep_initial(&mut self, username: &str) -> Result<()> {
        self.put_field("username", username.as_bytes())
    }

    /// Fields: `count:u8`, then per client `len(name):u8`, name bytes.
    ///
    /// Client names are sorted before encoding so the same roster always
    /// produces the same bytes; peers must not rely on any ordering.
    pub fn prep_welcome<'a, I>(&mut self, clients: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<&str> = clients.into_iter().collect();
        if names.len() > MAX_FIELD_LEN {
            return Err(ProtocolError::RosterTooLarge(names.len()));
        }
        for name in &names {
            check_field("username", name.as_bytes(), MAX_FIELD_LEN)?;
        }
        names.sort_unstable();

        self.payload.push(names.len() as u8);
        for name in names {
            self.payload.push(name.len() as u8);
            self.payload.extend_from_slice(name.as_bytes());
        }
        Ok(())
    }

    /// Fields: `code:u8`, `len(reason):u8`, reason bytes
    pub fn prep_server_disconnect(&mut self, code: u8, reason: &str) -> Result<()> {
        check_field("reason", reason.as_bytes(), MAX_FIELD_LEN)?;
        self.payload.push(code);
        self.payload.push(reason.len() as u8);
        self.payload.extend_from_slice(reason.as_bytes());
        Ok(())
    }

    /// Fields: `len(username):u8`, username bytes
    pub fn prep_client_connect(&mut self, username: &str) -> Result<()> {
        self.put_field("username", username.as_bytes())
    }

    /// Fields: `len(username):u8`, username bytes
    pub fn prep_client_disconnect(&mut self, username: &str) -> Result<()> {
        self.put_field("username", username.as_bytes())
    }

    /// Fields: `len(username):u8`, username bytes, `21 - len(username)` zero
    /// padding bytes, `encrypted:u8` (1/0), `len(message):u8`, message bytes.
    ///
    /// The username and its padding share a fixed 21-byte window ahead of the
    /// encrypted flag, so usernames here are capped at 20 bytes. Anything
    /// longer would shift the flag offset and is rejected outright.
    pub fn prep_general_message(
        &mut self,
        username: &str,
        message: &[u8],
        encrypted: bool,
    ) -> Result<()> {
        check_field("username", username.as_bytes(), MAX_USERNAME_LEN)?;
        check_field("message", message, MAX_FIELD_LEN)?;

        self.payload.push(username.len() as u8);
        self.payload.extend_from_slice(username.as_bytes());

        let padding = USERNAME_FLAG_WINDOW - username.len();
        self.payload.resize(self.payload.len() + padding, 0);
        self.payload.push(u8::from(encrypted));

        self.payload.push(message.len() as u8);
        self.payload.extend_from_slice(message);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Decode primitives
    // ------------------------------------------------------------------

    /// Bounds-check a read of `n` bytes at the cursor. On success the cursor
    /// has already advanced past the returned slice.
    fn take(&mut self, n: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(ProtocolError::Truncated {
                needed: n,
                position: self.position,
                remaining,
            });
        }
        let start = self.position;
        self.position += n;
        Ok(&self.payload[start..start + n])
    }

    /// Read the next `n` raw bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8]> {
        self.take(n)
    }

    /// Read the next byte as an unsigned 8-bit integer
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read the next `n` bytes as UTF-8 text. `n == 0` yields an empty
    /// string without moving the cursor; invalid UTF-8 is a decode error
    /// and leaves the cursor where it was.
    pub fn read_string(&mut self, n: usize) -> Result<String> {
        if n == 0 {
            return Ok(String::new());
        }
        let remaining = self.remaining();
        if n > remaining {
            return Err(ProtocolError::Truncated {
                needed: n,
                position: self.position,
                remaining,
            });
        }
        let bytes = &self.payload[self.position..self.position + n];
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ProtocolError::InvalidText { field: "string" })?;
        self.position += n;
        Ok(text.to_owned())
    }

    /// Read the next byte as a boolean: 1 is true, anything else is false
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take(1)?[0] == 1)
    }
}

fn check_field(field: &'static str, value: &[u8], max: usize) -> Result<()> {
    if value.len() > max {
        return Err(ProtocolError::FieldTooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}
