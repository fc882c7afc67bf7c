use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Frame interval in milliseconds.
    pub tick_ms: u64,
    /// Skip the one-time educational notice.
    pub skip_notice: bool,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            skip_notice: false,
            verbose: false,
        }
    }
}
