//! Driver configuration.

use serde::{Deserialize, Serialize};

/// Behavior knobs for the playback driver.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Number of frames a `set` snap spans.
    pub snap_frames: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { snap_frames: 2 }
    }
}
