//! Webserver state management

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Core webserver state
///
/// Holds no generated titles; the browser keeps the latest list.
#[derive(Debug)]
pub struct WebServerState {
    // Server configuration
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub server_has_api_key: bool,

    // Server state
    pub generation_count: Arc<AtomicU64>,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(bind_address: SocketAddr, static_dir: impl Into<PathBuf>, server_has_api_key: bool) -> Self {
        Self {
            bind_address,
            static_dir: static_dir.into(),
            server_has_api_key,
            generation_count: Arc::new(AtomicU64::new(0)),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count a completed generation cycle
    pub fn record_generation(&self) -> u64 {
        self.generation_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn generations(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }
}
