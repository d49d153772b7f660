//! # API REST
//!
//! REST API implementation for the health analysis registry.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the wire types; all domain logic lives in
//! `health-core` and `health-catalogue`.

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AddPatientReq, AddPatientRes, ConditionCountRes, ConditionRes, GenderTallyRes, HealthRes,
    HealthService, ListPatientsRes, PatientRes, ReportRes,
};
use health_catalogue::{Catalogue, FETCH_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
use health_core::{Condition, Gender, Patient, PatientForm, Registry, Report};

/// Application state for the REST API server.
///
/// The registry is the single in-memory record store for the process; it is
/// shared across handlers behind a lock and is gone on restart. The catalogue
/// is re-read from its file on every lookup, so only the path is held here.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<Registry>>,
    conditions_file: Arc<PathBuf>,
}

impl AppState {
    /// Creates state with an empty registry and the given catalogue path.
    pub fn new(conditions_file: PathBuf) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::new())),
            conditions_file: Arc::new(conditions_file),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, add_patient, list_patients, get_report, lookup_condition),
    components(schemas(
        HealthRes,
        AddPatientReq,
        AddPatientRes,
        PatientRes,
        ListPatientsRes,
        ConditionCountRes,
        GenderTallyRes,
        ReportRes,
        ConditionRes,
    ))
)]
struct ApiDoc;

/// Builds the full application router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients", post(add_patient))
        .route("/report", get(get_report))
        .route("/conditions/:name", get(lookup_condition))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current liveness status of the service. Used for monitoring
/// and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = AddPatientReq,
    responses(
        (status = 201, description = "Patient stored, report recomputed", body = AddPatientRes),
        (status = 400, description = "Incomplete or unrecognised submission")
    )
)]
/// Submit one intake form
///
/// Validates the four form fields, appends the record to the registry, and
/// recomputes the report over the full sequence. On validation failure the
/// registry is untouched and the validation message is returned.
///
/// # Errors
/// Returns `400 Bad Request` with the validation message if:
/// - any field is absent or blank, or
/// - gender/condition is not a member of its enumeration.
#[axum::debug_handler]
async fn add_patient(
    State(state): State<AppState>,
    Json(req): Json<AddPatientReq>,
) -> Result<(StatusCode, Json<AddPatientRes>), (StatusCode, String)> {
    let form = PatientForm {
        name: none_if_empty(req.name),
        gender: none_if_empty(req.gender),
        age: none_if_empty(req.age),
        condition: none_if_empty(req.condition),
    };

    let mut registry = state.registry.write().await;
    match registry.submit(form) {
        Ok(report) => {
            // submit appends last, so the stored record is at the tail
            let patient = registry
                .patients()
                .last()
                .map(patient_res)
                .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into()))?;
            Ok((
                StatusCode::CREATED,
                Json(AddPatientRes {
                    patient,
                    report: report_res(&report),
                }),
            ))
        }
        Err(e) => {
            tracing::debug!("submission rejected: {e}");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "Stored patients in insertion order", body = ListPatientsRes)
    )
)]
/// List all stored patients
///
/// Returns the registry contents in insertion order. The registry lives only
/// for the lifetime of the process.
#[axum::debug_handler]
async fn list_patients(State(state): State<AppState>) -> Json<ListPatientsRes> {
    let registry = state.registry.read().await;
    Json(ListPatientsRes {
        patients: registry.patients().iter().map(patient_res).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/report",
    responses(
        (status = 200, description = "Statistical report over all records", body = ReportRes)
    )
)]
/// Recompute and return the statistical report
///
/// The report is computed from scratch over the full record sequence on every
/// call; an empty registry yields a report of zeros.
#[axum::debug_handler]
async fn get_report(State(state): State<AppState>) -> Json<ReportRes> {
    let registry = state.registry.read().await;
    Json(report_res(&registry.report()))
}

#[utoipa::path(
    get,
    path = "/conditions/{name}",
    responses(
        (status = 200, description = "Matching condition record", body = ConditionRes),
        (status = 404, description = "No condition with that name"),
        (status = 500, description = "Catalogue file could not be read or parsed")
    )
)]
/// Look up a condition by name
///
/// Reads the catalogue document and resolves the name by exact
/// case-insensitive match. The document is re-read per request, so a broken
/// file surfaces here and nowhere else.
///
/// # Errors
/// Returns `404 Not Found` when no record matches, or `500 Internal Server
/// Error` when the catalogue cannot be read or parsed.
#[axum::debug_handler]
async fn lookup_condition(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Result<Json<ConditionRes>, (StatusCode, &'static str)> {
    let text = match tokio::fs::read_to_string(state.conditions_file.as_ref()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("catalogue read error: {e}");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_MESSAGE));
        }
    };

    let catalogue = match Catalogue::from_json(&text) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            tracing::error!("catalogue parse error: {e}");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_MESSAGE));
        }
    };

    match catalogue.find(&name) {
        Some(record) => Ok(Json(ConditionRes {
            name: record.name.clone(),
            symptoms: record.symptoms.clone(),
            prevention: record.prevention.clone(),
            treatment: record.treatment.clone(),
            imagesrc: record.imagesrc.clone(),
        })),
        None => Err((StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)),
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn patient_res(patient: &Patient) -> PatientRes {
    PatientRes {
        name: patient.name.as_str().to_owned(),
        gender: patient.gender.to_string(),
        age: patient.age.as_str().to_owned(),
        condition: patient.condition.to_string(),
    }
}

fn report_res(report: &Report) -> ReportRes {
    ReportRes {
        total: report.total,
        conditions: Condition::ALL
            .iter()
            .map(|c| ConditionCountRes {
                condition: c.to_string(),
                count: report.conditions.get(*c),
            })
            .collect(),
        gender_conditions: Gender::ALL
            .iter()
            .map(|g| GenderTallyRes {
                gender: g.to_string(),
                conditions: Condition::ALL
                    .iter()
                    .map(|c| ConditionCountRes {
                        condition: c.to_string(),
                        count: report.gender_conditions.get(*g).get(*c),
                    })
                    .collect(),
            })
            .collect(),
    }
}
