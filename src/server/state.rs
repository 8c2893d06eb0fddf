use axum::extract::FromRef;

use crate::board::JobBoard;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedJobBoard = Arc<JobBoard>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub board: SharedJobBoard,
}

impl FromRef<ServerState> for SharedJobBoard {
    fn from_ref(input: &ServerState) -> Self {
        input.board.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
