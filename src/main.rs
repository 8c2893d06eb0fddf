use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_server::board::JobBoard;
use jobboard_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// Number of job records to generate for the board.
    #[clap(long, default_value_t = 30)]
    pub jobs: usize,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Milliseconds a valid posting submission waits before answering.
    #[clap(long, default_value_t = 1500)]
    pub submit_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!("Generating the job board...");
    let board = JobBoard::generate(cli_args.jobs);
    info!("Board has {} job postings", board.get_jobs_count());

    let config = ServerConfig {
        requests_logging_level: cli_args.logging_level,
        port: cli_args.port,
        submit_delay: Duration::from_millis(cli_args.submit_delay_ms),
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(config, board).await
}
