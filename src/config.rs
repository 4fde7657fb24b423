//! # Wire Constants
//!
//! Centralized limits for the Prism wire format.
//!
//! The protocol core owns no file, CLI, or environment configuration; the
//! connection-manager layer above it does. What lives here are the fixed
//! numbers both ends of a connection must agree on.

/// Size of the frame length prefix in bytes (`u16`, big-endian)
pub const FRAME_HEADER_SIZE: usize = 2;

/// Max payload bytes a single frame can carry (length prefix is 16 bits)
pub const MAX_FRAME_SIZE: usize = u16::MAX as usize;

/// Max bytes for any length-prefixed field (length byte is 8 bits)
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Width of the fixed window between the username and the encrypted flag
/// in a `GeneralMessage` payload
pub const USERNAME_FLAG_WINDOW: usize = 21;

/// Max username bytes in a `GeneralMessage`; one byte of the flag window
/// must remain for the flag itself
pub const MAX_USERNAME_LEN: usize = USERNAME_FLAG_WINDOW - 1;
