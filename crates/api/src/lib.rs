//! # Briefgen API
//!
//! The REST surface for briefings: create, fetch by id, and replace the
//! data payload. Three thin handlers over a [`BriefingStore`], guarded by a
//! static API key with a public share-view read exemption, documented via
//! OpenAPI/Swagger.

pub mod auth;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use briefgen_storage::BriefingStore;
use briefgen_types::{Briefing, BriefingData, NonEmptyText};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The shared secret expected in `x-api-key`. `None` means the server
    /// is misconfigured and protected routes answer 500.
    pub api_key: Option<String>,
}

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BriefingStore>,
    pub config: Arc<ApiConfig>,
}

/// JSON error payload used by every failure response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A briefing as it appears on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BriefingRes {
    pub id: String,
    pub category: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Briefing> for BriefingRes {
    fn from(briefing: Briefing) -> Self {
        Self {
            id: briefing.id,
            category: briefing.category,
            data: serde_json::to_value(&briefing.data).unwrap_or_default(),
            created_at: briefing.created_at.to_rfc3339(),
            updated_at: briefing.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBriefingReq {
    pub category: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBriefingReq {
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BriefingQuery {
    /// Briefing identifier assigned on creation
    pub uuid: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_briefing, get_briefing, update_briefing),
    components(schemas(
        HealthRes,
        ErrorBody,
        BriefingRes,
        CreateBriefingReq,
        UpdateBriefingReq,
    ))
)]
struct ApiDoc;

type HandlerError = (StatusCode, Json<ErrorBody>);

fn error(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
}

/// Decodes the request's `data` value into the typed payload. Shape
/// mismatches are the caller's fault, not a server failure.
fn decode_data(value: serde_json::Value) -> Result<BriefingData, HandlerError> {
    serde_json::from_value(value).map_err(|e| {
        error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid data payload: {e}"),
        )
    })
}

/// Builds the application router around the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/briefings",
            get(get_briefing).post(create_briefing).put(update_briefing),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
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
/// Health check endpoint, used by monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Briefgen API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/briefings",
    request_body = CreateBriefingReq,
    responses(
        (status = 201, description = "Briefing created", body = BriefingRes),
        (status = 400, description = "Missing category or data", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
/// Creates a new briefing from a category and a data payload.
///
/// # Errors
/// Returns `400 Bad Request` when `category` or `data` is missing, and
/// `500 Internal Server Error` when the storage backend fails.
#[axum::debug_handler]
async fn create_briefing(
    State(state): State<AppState>,
    Json(req): Json<CreateBriefingReq>,
) -> Result<(StatusCode, Json<BriefingRes>), HandlerError> {
    // A whitespace-only category counts as missing.
    let category = req
        .category
        .and_then(|category| NonEmptyText::new(category).ok());
    let (category, data) = match (category, req.data) {
        (Some(category), Some(data)) => (category, data),
        _ => {
            return Err(error(
                StatusCode::BAD_REQUEST,
                "Missing required fields: category and data",
            ))
        }
    };

    let data = decode_data(data)?;

    match state.store.create(category.as_str(), data).await {
        Ok(briefing) => Ok((StatusCode::CREATED, Json(briefing.into()))),
        Err(e) => {
            tracing::error!("Error creating briefing: {e}");
            Err(error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create briefing",
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/briefings",
    params(BriefingQuery),
    responses(
        (status = 200, description = "Briefing found", body = BriefingRes),
        (status = 400, description = "Missing uuid parameter", body = ErrorBody),
        (status = 404, description = "Briefing not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
/// Fetches an existing briefing by its identifier.
///
/// # Errors
/// Returns `400 Bad Request` without a `uuid` parameter, `404 Not Found`
/// for an unknown id, and `500 Internal Server Error` on storage failure.
#[axum::debug_handler]
async fn get_briefing(
    State(state): State<AppState>,
    Query(query): Query<BriefingQuery>,
) -> Result<Json<BriefingRes>, HandlerError> {
    let uuid = query.uuid.filter(|uuid| !uuid.is_empty()).ok_or_else(|| {
        error(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: uuid",
        )
    })?;

    match state.store.get(&uuid).await {
        Ok(Some(briefing)) => Ok(Json(briefing.into())),
        Ok(None) => Err(error(StatusCode::NOT_FOUND, "Briefing not found")),
        Err(e) => {
            tracing::error!("Error fetching briefing: {e}");
            Err(error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch briefing",
            ))
        }
    }
}

#[utoipa::path(
    put,
    path = "/briefings",
    params(BriefingQuery),
    request_body = UpdateBriefingReq,
    responses(
        (status = 200, description = "Briefing updated", body = BriefingRes),
        (status = 400, description = "Missing uuid or data", body = ErrorBody),
        (status = 404, description = "Briefing not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
/// Replaces a briefing's data payload.
///
/// The whole payload is swapped; there are no partial updates. The
/// briefing's `updatedAt` timestamp is refreshed.
///
/// # Errors
/// Returns `400 Bad Request` when `uuid` or `data` is missing, `404 Not
/// Found` for an unknown id, and `500 Internal Server Error` on storage
/// failure.
#[axum::debug_handler]
async fn update_briefing(
    State(state): State<AppState>,
    Query(query): Query<BriefingQuery>,
    Json(req): Json<UpdateBriefingReq>,
) -> Result<Json<BriefingRes>, HandlerError> {
    let uuid = query.uuid.filter(|uuid| !uuid.is_empty()).ok_or_else(|| {
        error(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: uuid",
        )
    })?;

    let data = req
        .data
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Missing required field: data"))?;
    let data = decode_data(data)?;

    match state.store.update(&uuid, data).await {
        Ok(Some(briefing)) => Ok(Json(briefing.into())),
        Ok(None) => Err(error(StatusCode::NOT_FOUND, "Briefing not found")),
        Err(e) => {
            tracing::error!("Error updating briefing: {e}");
            Err(error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update briefing",
            ))
        }
    }
}
