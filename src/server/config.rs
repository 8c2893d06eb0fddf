use std::time::Duration;

use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// How long a valid posting submission waits before answering. The
    /// submission itself is discarded either way.
    pub submit_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            submit_delay: Duration::from_millis(1500),
        }
    }
}
