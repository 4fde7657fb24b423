//! # Error Types
//!
//! Error handling for the Prism wire protocol.
//!
//! This module defines all error variants that can occur while encoding,
//! framing, sending, and decoding packets.
//!
//! ## Error Categories
//! - **I/O Errors**: connection read/write failures, closed peers
//! - **Decode Errors**: truncated or malformed payloads, invalid text
//! - **Encode Errors**: fields or frames exceeding the wire limits
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use prism_protocol::core::packet::Packet;
//! use prism_protocol::error::Result;
//!
//! fn username_of(packet: &mut Packet) -> Result<String> {
//!     let _tag = packet.read_u8()?;
//!     let len = packet.read_u8()?;
//!     packet.read_string(len as usize)
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// ProtocolError is the primary error type for all protocol operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Truncated packet: {needed} bytes requested at offset {position}, {remaining} remaining")]
    Truncated {
        needed: usize,
        position: usize,
        remaining: usize,
    },

    #[error("Invalid UTF-8 in {field} field")]
    #[serde(skip_serializing, skip_deserializing)]
    InvalidText { field: &'static str },

    #[error("Field too long: {field} is {len} bytes (max {max})")]
    #[serde(skip_serializing, skip_deserializing)]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Frame payload too large: {0} bytes")]
    OversizedFrame(usize),

    #[error("Roster too large for welcome packet: {0} entries")]
    RosterTooLarge(usize),

    #[error("Unknown packet type tag: {0}")]
    UnknownPacketType(u8),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
