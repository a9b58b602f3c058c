use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;

/// Process-wide "keep running" flag
///
/// Cleared once by the signal path, polled by the idle loop. Clones share
/// the same flag.
#[derive(Debug, Clone)]
pub struct ShutdownFlag {
    running: Arc<AtomicBool>,
}

impl ShutdownFlag {
    /// New flag in the running state
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask every holder of this flag to stop
    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Clear the flag on SIGINT or SIGTERM
    ///
    /// Can only be installed once per process.
    pub fn install_signal_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || {
            info!("termination signal received");
            flag.request_shutdown();
        })
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}
