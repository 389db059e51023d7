//! Table configuration
//!
//! The in-memory tables can simulate the latency of a real store. Tests use
//! it to widen the read-modify-write window so that a missing lock would
//! actually lose updates.

use std::thread;
use std::time::Duration;
use tracing::info;

/// Configuration options for the in-memory tables
///
/// # Example
///
/// ```rust
/// use infra_memory::TableConfig;
/// use std::time::Duration;
///
/// let config = TableConfig::new()
///     .read_latency(Duration::from_millis(5))
///     .write_latency(Duration::from_millis(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    /// Delay applied to every read
    pub read_latency: Duration,
    /// Delay applied to every write or append
    pub write_latency: Duration,
}

impl TableConfig {
    /// Creates a configuration with no simulated latency
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay applied to every read
    ///
    /// # Arguments
    ///
    /// * `latency` - Duration to sleep before returning (default: zero)
    pub fn read_latency(mut self, latency: Duration) -> Self {
        self.read_latency = latency;
        self
    }

    /// Sets the delay applied to every write
    ///
    /// # Arguments
    ///
    /// * `latency` - Duration to sleep before storing (default: zero)
    pub fn write_latency(mut self, latency: Duration) -> Self {
        self.write_latency = latency;
        self
    }

    /// Returns true if any latency is simulated
    pub fn is_throttled(&self) -> bool {
        !self.read_latency.is_zero() || !self.write_latency.is_zero()
    }

    pub(crate) fn before_read(&self) {
        throttle(self.read_latency);
    }

    pub(crate) fn before_write(&self) {
        throttle(self.write_latency);
    }

    pub(crate) fn log_created(&self, table: &str) {
        if self.is_throttled() {
            info!(
                table,
                read_latency_ms = self.read_latency.as_millis() as u64,
                write_latency_ms = self.write_latency.as_millis() as u64,
                "Created throttled in-memory table"
            );
        }
    }
}

fn throttle(latency: Duration) {
    if !latency.is_zero() {
        thread::sleep(latency);
    }
}
