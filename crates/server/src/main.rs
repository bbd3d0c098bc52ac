// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use horario::{Scheduler, Snapshot};
use horario_api::{
    ApiError, CatalogResponse, CreateSectionsRequest, CreateSectionsResponse, GridView,
    ListAvailableResponse, MoveRequest, MoveResponse, SaveResponse, StoredPeriodsResponse,
    SwitchPeriodRequest, SwitchPeriodResponse, build_grid_view, create_sections, export_report,
    fetch_stored, get_catalog, get_snapshot, list_available, list_stored_periods, move_section,
    save, store_snapshot, switch_period,
};
use horario_domain::{Catalog, Program};
use horario_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Horário Server - HTTP server for the course timetable planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to the JSON document mapping program names to offerings
    #[arg(long)]
    catalog: Option<String>,

    /// Path to the JSON list of elective offerings
    #[arg(long)]
    electives: Option<String>,

    /// Academic period selected at startup
    #[arg(long, default_value = "20252")]
    period: String,

    /// Program selected at startup
    #[arg(long, default_value = "Engenharia de Computação")]
    program: String,
}

/// Application state shared across handlers.
///
/// When a handler needs both, the scheduler is locked before the store.
#[derive(Clone)]
struct AppState {
    /// The working timetable.
    scheduler: Arc<Mutex<Scheduler>>,
    /// The snapshot store.
    persistence: Arc<Mutex<Persistence>>,
    /// The static course catalog.
    catalog: Arc<Catalog>,
}

/// Query parameters for GET `/catalog`.
#[derive(Debug, Clone, Deserialize)]
struct CatalogQuery {
    program: Option<String>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true for error responses.
    error: bool,
    /// The error message.
    message: String,
}

/// HTTP error wrapper for API errors.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/api/horarios` endpoint.
async fn handle_list_stored(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StoredPeriodsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: StoredPeriodsResponse = list_stored_periods(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/horarios/{period}` endpoint.
///
/// Returns the stored timetable of a period, or `null`.
async fn handle_get_stored(
    AxumState(app_state): AxumState<AppState>,
    Path(period): Path<String>,
) -> Result<Json<Option<Snapshot>>, HttpError> {
    info!(period = %period, "Handling get_stored request");

    let mut persistence = app_state.persistence.lock().await;
    let snapshot: Option<Snapshot> = fetch_stored(&mut persistence, &period)?;
    drop(persistence);

    Ok(Json(snapshot))
}

/// Handler for POST `/api/horarios` endpoint.
///
/// Stores a full timetable snapshot under its period.
async fn handle_put_stored(
    AxumState(app_state): AxumState<AppState>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<SaveResponse>, HttpError> {
    info!(period = %snapshot.period, "Handling put_stored request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SaveResponse = store_snapshot(&mut persistence, &snapshot)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/catalog` endpoint.
async fn handle_get_catalog(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    info!(program = ?params.program, "Handling get_catalog request");

    let scheduler = app_state.scheduler.lock().await;
    let response: CatalogResponse =
        get_catalog(&app_state.catalog, &scheduler, params.program.as_deref());
    drop(scheduler);

    Json(response)
}

/// Handler for POST `/session/period` endpoint.
///
/// Switches period (and optionally program), loading the stored timetable.
async fn handle_switch_period(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SwitchPeriodRequest>,
) -> Result<Json<SwitchPeriodResponse>, HttpError> {
    info!(period = %req.period, program = ?req.program, "Handling switch_period request");

    let mut scheduler = app_state.scheduler.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let response: SwitchPeriodResponse = switch_period(&mut scheduler, &mut persistence, &req)?;
    drop(persistence);
    drop(scheduler);

    Ok(Json(response))
}

/// Handler for POST `/sections` endpoint.
async fn handle_create_sections(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSectionsRequest>,
) -> Result<Json<CreateSectionsResponse>, HttpError> {
    info!(
        offering = %req.offering_code,
        quantity = %req.quantity,
        "Handling create_sections request"
    );

    let mut scheduler = app_state.scheduler.lock().await;
    let response: CreateSectionsResponse =
        create_sections(&mut scheduler, &app_state.catalog, &req)?;
    drop(scheduler);

    Ok(Json(response))
}

/// Handler for POST `/moves` endpoint.
async fn handle_move(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, HttpError> {
    info!(
        source = %req.source,
        destination = ?req.destination,
        source_index = req.source_index,
        "Handling move request"
    );

    let mut scheduler = app_state.scheduler.lock().await;
    let response: MoveResponse = move_section(&mut scheduler, req)?;
    drop(scheduler);

    Ok(Json(response))
}

/// Handler for GET `/available` endpoint.
async fn handle_list_available(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListAvailableResponse> {
    let scheduler = app_state.scheduler.lock().await;
    Json(list_available(&scheduler))
}

/// Handler for GET `/slots` endpoint.
async fn handle_get_slots(AxumState(app_state): AxumState<AppState>) -> Json<GridView> {
    let scheduler = app_state.scheduler.lock().await;
    Json(build_grid_view(&scheduler))
}

/// Handler for GET `/snapshot` endpoint.
async fn handle_get_snapshot(AxumState(app_state): AxumState<AppState>) -> Json<Snapshot> {
    let scheduler = app_state.scheduler.lock().await;
    Json(get_snapshot(&scheduler))
}

/// Handler for POST `/save` endpoint.
///
/// Saves the working timetable under the selected period.
async fn handle_save(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SaveResponse>, HttpError> {
    let scheduler = app_state.scheduler.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    info!(period = %scheduler.period(), "Handling save request");
    let response: SaveResponse = save(&scheduler, &mut persistence)?;
    drop(persistence);
    drop(scheduler);

    Ok(Json(response))
}

/// Handler for GET `/report.csv` endpoint.
async fn handle_get_report(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    let scheduler = app_state.scheduler.lock().await;
    let report: String = export_report(&scheduler)?;
    let disposition: String = format!(
        "attachment; filename=\"Relatorio_Horario_{}.csv\"",
        scheduler.program().name().replace('"', "")
    );
    drop(scheduler);

    Ok((
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report,
    )
        .into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/horarios/{period}", get(handle_get_stored))
        .route(
            "/api/horarios",
            get(handle_list_stored).post(handle_put_stored),
        )
        .route("/catalog", get(handle_get_catalog))
        .route("/session/period", post(handle_switch_period))
        .route("/sections", post(handle_create_sections))
        .route("/moves", post(handle_move))
        .route("/available", get(handle_list_available))
        .route("/slots", get(handle_get_slots))
        .route("/snapshot", get(handle_get_snapshot))
        .route("/save", post(handle_save))
        .route("/report.csv", get(handle_get_report))
        .with_state(app_state)
}

/// Reads the catalog documents named on the command line.
///
/// A missing path is read as an empty document.
async fn load_catalog(args: &Args) -> Result<Catalog, Box<dyn std::error::Error>> {
    let programs_json: String = match &args.catalog {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => String::from("{}"),
    };
    let electives_json: String = match &args.electives {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => String::from("[]"),
    };

    Ok(Catalog::from_json(&programs_json, &electives_json)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Horário Server");

    let catalog: Catalog = load_catalog(&args).await?;
    info!(programs = catalog.programs().len(), "Loaded course catalog");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let mut scheduler: Scheduler =
        Scheduler::new(args.period.clone(), Program::new(&args.program));
    switch_period(
        &mut scheduler,
        &mut persistence,
        &SwitchPeriodRequest {
            period: args.period.clone(),
            program: None,
        },
    )?;

    let app_state: AppState = AppState {
        scheduler: Arc::new(Mutex::new(scheduler)),
        persistence: Arc::new(Mutex::new(persistence)),
        catalog: Arc::new(catalog),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
