//! Tracks metadata for a paint-resolution session.

use crate::log;

/// Metadata for a paint-resolution session.
///
/// A session spans the resolution of one document.  For now it only
/// carries whether log messages should be printed.
#[derive(Debug, Clone)]
pub struct Session {
    log_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            log_enabled: log::log_enabled(),
        }
    }
}

impl Session {
    /// Creates a session that logs if the `SVGPAINT_LOG` environment variable is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with logging explicitly turned on or off.
    pub fn new_with_logging(log_enabled: bool) -> Self {
        Self { log_enabled }
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }
}
