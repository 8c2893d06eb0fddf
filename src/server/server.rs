use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{error, info, warn};

use crate::board::JobBoard;
use crate::posting::{self, FormErrors, JobPostingForm};
use crate::search::filter_jobs;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use super::pages::{DetailPage, ListingPage, NotFoundPage, PostingFormPage, POPULAR_SEARCHES};
use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub jobs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug, Default)]
struct ListingParams {
    #[serde(default)]
    pub q: String,
}

fn render<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Failed to render template: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn listing(
    State(board): State<SharedJobBoard>,
    Query(params): Query<ListingParams>,
) -> Response {
    let jobs = filter_jobs(board.jobs(), &params.q);
    render(
        StatusCode::OK,
        ListingPage {
            query: &params.q,
            jobs,
            popular_searches: &POPULAR_SEARCHES,
        },
    )
}

async fn job_detail(State(board): State<SharedJobBoard>, Path(id): Path<String>) -> Response {
    match board.get_job(&id) {
        Some(job) => render(StatusCode::OK, DetailPage { job }),
        None => render(StatusCode::NOT_FOUND, NotFoundPage),
    }
}

async fn posting_form() -> Response {
    render(
        StatusCode::OK,
        PostingFormPage {
            form: &JobPostingForm::default(),
            errors: &FormErrors::default(),
            submitted: false,
        },
    )
}

async fn submit_posting(
    State(config): State<ServerConfig>,
    Form(form): Form<JobPostingForm>,
) -> Response {
    let errors = posting::validate(&form);
    if !errors.is_empty() {
        return render(
            StatusCode::UNPROCESSABLE_ENTITY,
            PostingFormPage {
                form: &form,
                errors: &errors,
                submitted: false,
            },
        );
    }

    // Simulated processing latency. The submission is discarded afterwards.
    tokio::time::sleep(config.submit_delay).await;
    info!(
        "Received job posting \"{}\" at {}",
        form.title, form.company
    );

    render(
        StatusCode::OK,
        PostingFormPage {
            form: &JobPostingForm::default(),
            errors: &FormErrors::default(),
            submitted: true,
        },
    )
}

async fn healthz(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        jobs: state.board.get_jobs_count(),
    };
    Json(stats)
}

impl ServerState {
    fn new(config: ServerConfig, board: JobBoard) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            board: Arc::new(board),
        }
    }
}

pub fn make_app(config: ServerConfig, board: JobBoard) -> Router {
    let state = ServerState::new(config, board);

    Router::new()
        .route("/", get(listing))
        .route("/job/{id}", get(job_detail))
        .route("/jobPosting", get(posting_form))
        .route("/jobPosting", post(submit_posting))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(config: ServerConfig, board: JobBoard) -> Result<()> {
    let port = config.port;
    let app = make_app(config, board);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    tokio::select! {
        result = axum::serve(listener, app) => {
            warn!("server ended unexpectedly: {:?}", &result);
        },
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
