//! # Transport Layer
//!
//! Whole-frame packet I/O over stream connections.
//!
//! Each connection's packet traffic is single-threaded by convention: one
//! reader task per connection, sends serialized by the caller. This layer
//! adds no synchronization of its own.

pub mod frame;

pub use frame::{read_packet, send_packet};
