//! # Prism Protocol
//!
//! Typed, length-framed wire protocol core for the Prism chat service.
//!
//! This crate owns the packet byte layout, the encode/decode contract, and
//! the transport-level framing for sending and receiving whole packets over
//! a stream connection. Connection lifecycle, command loops, and terminal
//! I/O live in the layers above it.
//!
//! ## Components
//! - [`core::packet`]: packet types, per-type encoders, and bounds-checked
//!   cursor decoding
//! - [`core::codec`]: Tokio codec for `Framed` packet streams
//! - [`transport`]: whole-frame send/receive over any async connection
//! - [`protocol::dispatcher`]: best-effort broadcast over a client roster
//!
//! ## Example
//! ```no_run
//! use prism_protocol::core::packet::{Packet, PacketType};
//! use prism_protocol::error::Result;
//! use prism_protocol::transport::{read_packet, send_packet};
//! use tokio::net::TcpStream;
//!
//! async fn greet(conn: &mut TcpStream, username: &str) -> Result<Packet> {
//!     let mut hello = Packet::outbound(PacketType::Initial);
//!     hello.prep_initial(username)?;
//!     send_packet(conn, &hello).await?;
//!     read_packet(conn).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;

pub use crate::core::codec::PacketCodec;
pub use crate::core::packet::{Packet, PacketType};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::dispatcher::{BroadcastReport, Roster};
