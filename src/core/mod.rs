//! # Core Protocol Components
//!
//! Low-level packet handling, codecs, and binary encoding.
//!
//! This module provides the foundation for the protocol, handling packet
//! framing, encoding/decoding, and wire format.
//!
//! ## Components
//! - **Packet**: typed payload buffer with a sequential read cursor
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(2, BE)] [Payload(N)]
//! ```
//! The payload's first byte is the packet type tag; the remaining bytes are
//! type-specific fields. There is no magic number, version byte, or
//! checksum — both ends must agree on the type enumeration and field order.
//!
//! ## Safety
//! - Frame length is bounded by the 16-bit prefix; oversized payloads are
//!   rejected at encode time, never silently truncated
//! - All decode primitives are bounds-checked and fail with an explicit
//!   error on truncated input

pub mod codec;
pub mod packet;
