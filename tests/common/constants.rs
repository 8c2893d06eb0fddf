//! Shared constants for end-to-end tests
//!
//! When test data changes (board size, timeouts), update only this file.

/// Number of job postings generated for each test server board.
pub const BOARD_SIZE: usize = 30;

/// Timeout for a single request.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a spawned server to answer its health probe.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Poll interval while waiting for readiness.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
