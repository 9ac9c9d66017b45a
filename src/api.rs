use crate::{
    assessment::{report::FieldFallback, AssessmentData, Session, SessionEvent, SessionSnapshot},
    config::Config,
    error::{AppError, FieldError},
    estimation::{estimate, ClimateConstants, EstimationResult, PropertyInfo, PropertyInput},
    simulation::{DimensionKey, PropertyKind, SimSignal, Simulation, SimulationSnapshot},
    MAX_MSGS,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, error, info};

pub struct AppState {
    pub session: RwLock<Session>,
    pub simulation: Arc<RwLock<Simulation>>,
    pub sim_tx: mpsc::Sender<SimSignal>,
    pub climate: ClimateConstants,
}

impl AppState {
    /// The receiver goes to the simulation runner.
    pub fn new(cfg: &Config, seed: u64) -> (Arc<Self>, mpsc::Receiver<SimSignal>) {
        let (sim_tx, sim_rx) = mpsc::channel(MAX_MSGS);
        let app_state = Self {
            session: RwLock::new(Session::new(cfg.climate)),
            simulation: Arc::new(RwLock::new(Simulation::new(cfg.simulation, cfg.climate, seed))),
            sim_tx,
            climate: cfg.climate,
        };
        (Arc::new(app_state), sim_rx)
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnknownCommand(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "Request failed.");
        }
        let fields = match &self {
            AppError::ValidationError(fields) => fields.clone(),
            _ => vec![],
        };
        (status, Json(ErrorResponse { error: self.to_string(), fields })).into_response()
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct EstimationResponse {
    pub result: EstimationResult,
    pub fallbacks: Vec<FieldFallback>,
}

pub async fn post_estimate(
    State(app_state): State<Arc<AppState>>, Json(info): Json<PropertyInfo>,
) -> Json<EstimationResponse> {
    let input = PropertyInput::from_raw(&info);
    let result = estimate(&input, &app_state.climate);
    let fallbacks = input.fallbacks().into_iter().map(|(field, reason)| FieldFallback { field, reason }).collect();
    Json(EstimationResponse { result, fallbacks })
}

pub async fn get_session(State(app_state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(app_state.session.read().await.snapshot())
}

pub async fn put_session_form(
    State(app_state): State<Arc<AppState>>, Json(form): Json<AssessmentData>,
) -> Result<Json<SessionSnapshot>, AppError> {
    apply_session_event(&app_state, SessionEvent::UpdateForm(Box::new(form))).await
}

/// `POST /session/form` shares its path with the form upload, so it is routed here explicitly.
pub async fn post_back_to_form(State(app_state): State<Arc<AppState>>) -> Result<Json<SessionSnapshot>, AppError> {
    apply_session_event(&app_state, SessionEvent::BackToForm).await
}

pub async fn post_session_event(
    State(app_state): State<Arc<AppState>>, Path(event): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let event: SessionEvent = event.parse().map_err(|_| AppError::UnknownCommand(event.clone()))?;
    apply_session_event(&app_state, event).await
}

async fn apply_session_event(app_state: &AppState, event: SessionEvent) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = app_state.session.write().await;
    session.handle_event(event)?;
    Ok(Json(session.snapshot()))
}

pub async fn get_simulation(State(app_state): State<Arc<AppState>>) -> Json<SimulationSnapshot> {
    Json(app_state.simulation.read().await.snapshot())
}

pub async fn post_property(
    State(app_state): State<Arc<AppState>>, Path(kind): Path<String>,
) -> Result<Json<SimulationSnapshot>, AppError> {
    let kind: PropertyKind = kind.parse().map_err(|_| AppError::UnknownCommand(kind.clone()))?;
    let mut sim = app_state.simulation.write().await;
    sim.handle_signal(SimSignal::SelectProperty(kind))?;
    Ok(Json(sim.snapshot()))
}

/// Dimensions arrive as typed text; missing ones keep the panel's current value.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DimensionsRequest {
    pub length: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub location: String,
}

pub async fn post_dimensions(
    State(app_state): State<Arc<AppState>>, Json(req): Json<DimensionsRequest>,
) -> Result<Json<SimulationSnapshot>, AppError> {
    let mut sim = app_state.simulation.write().await;
    let updates = [(DimensionKey::Length, req.length), (DimensionKey::Width, req.width), (DimensionKey::Height, req.height)];
    for (key, text) in updates {
        if let Some(text) = text {
            sim.handle_signal(SimSignal::UpdateDimension(key, text))?;
        }
    }
    sim.handle_signal(SimSignal::SetLocation(req.location))?;
    sim.handle_signal(SimSignal::SubmitDimensions)?;
    Ok(Json(sim.snapshot()))
}

/// Leaving takes the lock directly so a new property can be picked right after.
pub async fn post_simulation_exit(State(app_state): State<Arc<AppState>>) -> Result<Json<SimulationSnapshot>, AppError> {
    let mut sim = app_state.simulation.write().await;
    sim.handle_signal(SimSignal::Exit)?;
    Ok(Json(sim.snapshot()))
}

/// Play controls are queued for the frame loop, which owns the month ticker.
pub async fn post_simulation_command(
    State(app_state): State<Arc<AppState>>, Path(command): Path<String>,
) -> Result<(StatusCode, Json<String>), AppError> {
    let signal: SimSignal = command.parse().map_err(|_| AppError::UnknownCommand(command.clone()))?;
    debug!(signal = %signal, "Queueing simulation signal.");
    app_state.sim_tx.send(signal).await.map_err(|e| AppError::SimulationError(e.to_string()))?;
    Ok((StatusCode::ACCEPTED, Json(format!("{} queued", command))))
}

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/estimate", post(post_estimate))
        .route("/session", get(get_session))
        .route("/session/form", put(put_session_form).post(post_back_to_form))
        .route("/session/:event", post(post_session_event))
        .route("/simulation", get(get_simulation))
        .route("/simulation/property/:kind", post(post_property))
        .route("/simulation/dimensions", post(post_dimensions))
        .route("/simulation/exit", post(post_simulation_exit))
        .route("/simulation/:command", post(post_simulation_command))
        .with_state(app_state)
}

pub async fn run_web_server(
    address: &str, app_state: Arc<AppState>, handle: axum_server::Handle,
) -> Result<(), AppError> {
    let addr: std::net::SocketAddr =
        address.parse().map_err(|e| AppError::ConfigError(format!("Invalid server address {}: {}", address, e)))?;
    info!("Starting HTTP server on http://{}", addr);
    axum_server::bind(addr).handle(handle).serve(router(app_state).into_make_service()).await?;
    Ok(())
}
