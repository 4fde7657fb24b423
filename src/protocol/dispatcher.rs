//! # Broadcast Dispatcher
//!
//! Best-effort fan-out of one packet to every connection in a roster.
//!
//! The [`Roster`] is the owned, lock-wrapped registry mapping usernames to
//! live connections. Holding its lock for the duration of a broadcast keeps
//! the membership stable while frames go out; inserts and removals queue
//! behind the fan-out.

use std::collections::HashMap;
use tokio::io::AsyncWrite;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::core::packet::Packet;
use crate::error::ProtocolError;
use crate::transport::send_packet;

/// Registry of connected clients, keyed by username.
///
/// The connection type is generic so tests can fan out over in-memory
/// streams; in production it is a TCP stream or its write half.
pub struct Roster<C> {
    connections: Mutex<HashMap<String, C>>,
}

/// Outcome of one broadcast: how many sends completed, and the error for
/// each recipient that failed. Failed recipients stay in the roster; the
/// connection manager owns eviction policy.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failures: HashMap<String, ProtocolError>,
}

impl BroadcastReport {
    /// True when every roster entry received the packet
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<C> Default for Roster<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Roster<C> {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }

    /// Register a connection, returning the one it displaced, if any
    pub async fn insert(&self, username: impl Into<String>, conn: C) -> Option<C> {
        self.connections.lock().await.insert(username.into(), conn)
    }

    /// Remove a connection by username
    pub async fn remove(&self, username: &str) -> Option<C> {
        self.connections.lock().await.remove(username)
    }

    pub async fn len(&self) -> usize {
        self.connections.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.lock().await.is_empty()
    }

    /// Sorted snapshot of connected usernames, as fed to
    /// [`prep_welcome`](crate::core::packet::Packet::prep_welcome)
    pub async fn usernames(&self) -> Vec<String> {
        let guard = self.connections.lock().await;
        let mut names: Vec<String> = guard.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<C> Roster<C>
where
    C: AsyncWrite + Unpin,
{
    /// Send `packet` to every connection in the roster.
    ///
    /// Every entry gets exactly one send attempt with the identical payload;
    /// a failure on one recipient never stops the rest. Per-recipient errors
    /// are collected in the returned [`BroadcastReport`] rather than
    /// silently dropped, and nothing is retried at this layer.
    pub async fn broadcast(&self, packet: &Packet) -> BroadcastReport {
        let mut guard = self.connections.lock().await;
        let mut report = BroadcastReport::default();

        for (username, conn) in guard.iter_mut() {
            match send_packet(conn, packet).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!(username = %username, error = %e, "broadcast send failed");
                    report.failures.insert(username.clone(), e);
                }
            }
        }

        debug!(
            delivered = report.delivered,
            failed = report.failures.len(),
            bytes = packet.payload().len(),
            "broadcast complete"
        );
        report
    }
}
