//! # Protocol Layer
//!
//! Packet fan-out above the core codec and transport.
//!
//! Connection lifecycle and session sequencing (who sends `Initial` when,
//! how `Welcome` replies are driven) belong to the connection manager above
//! this crate; this layer only delivers already-built packets.

pub mod dispatcher;

pub use dispatcher::{BroadcastReport, Roster};
