//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::competitiveness::CompetitivenessError;

use super::dto::*;
use super::state::{AppState, LoadStatus};

const FRONTEND_NOT_FOUND: &str = "<html><body><h1>Frontend not found</h1>\
<p>Place index.html in the static directory.</p></body></html>";

/// Create the application router.
///
/// `cors_origins` are the browser origins allowed to call the API.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let static_dir = state.static_dir().to_path_buf();

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/city-coords", get(city_coords))
        .route("/route", post(lookup_route))
        .route("/competitiveness", get(competitiveness))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint.
///
/// A failed load answers 503 so that supervisors treat the instance as down.
async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.status() {
        LoadStatus::Ready => (StatusCode::OK, "ok"),
        LoadStatus::Loading => (StatusCode::OK, "loading"),
        LoadStatus::Failed => (StatusCode::SERVICE_UNAVAILABLE, "failed"),
    }
}

/// Frontend entry page.
async fn index_page(State(state): State<AppState>) -> Response {
    let path = state.static_dir().join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "frontend not available");
            (StatusCode::NOT_FOUND, Html(FRONTEND_NOT_FOUND)).into_response()
        }
    }
}

/// All city names, sorted.
async fn list_cities(State(state): State<AppState>) -> Result<Json<CitiesResponse>, AppError> {
    let cities = state
        .data()?
        .cities()
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(CitiesResponse { cities }))
}

/// Coordinates of every city in the coordinate table, keyed by name.
async fn city_coords(State(state): State<AppState>) -> Result<Response, AppError> {
    let coords: BTreeMap<_, _> = state.data()?.city_coords().iter().collect();
    Ok(Json(coords).into_response())
}

/// Exact route lookup.
///
/// Names are matched verbatim; a miss is a normal response, not an error.
async fn lookup_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let data = state.data()?;

    let response = match data.lookup_route(&req.origin, &req.destination) {
        Some(found) => RouteResponse::found(RouteInfo::from_match(&found)),
        None => {
            debug!(origin = %req.origin, destination = %req.destination, "route not found");
            RouteResponse::not_found(&req.origin, &req.destination)
        }
    };

    Ok(Json(response))
}

/// Competitiveness analysis for an origin.
async fn competitiveness(
    State(state): State<AppState>,
    Query(req): Query<CompetitivenessRequest>,
) -> Result<Json<CompetitivenessResponse>, AppError> {
    if req.origin.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "origin must not be empty".to_string(),
        });
    }
    // Fail fast before handing off to a blocking thread.
    state.data()?;

    // The substring fallback scans the whole dataset.
    let summary = tokio::task::spawn_blocking(move || {
        let data = state.data()?;
        data.competitiveness(&req.origin).map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("analysis task failed: {e}"),
    })??;

    Ok(Json(CompetitivenessResponse::from_summary(&summary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// The dataset is still loading.
    NotReady,
    /// The dataset could not be loaded; retrying will not help.
    LoadFailed { message: String },
    /// The dataset lacks a column the analysis needs.
    Config { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            AppError::LoadFailed { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::NotFound { .. } => "not_found",
            AppError::NotReady => "not_ready",
            AppError::LoadFailed { .. } => "load_failed",
            AppError::Config { .. } => "config_error",
            AppError::Internal { .. } => "internal",
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Config { message }
            | AppError::Internal { message } => message.clone(),
            AppError::LoadFailed { message } => format!("dataset failed to load: {message}"),
            AppError::NotReady => "service not ready: dataset is still loading".to_string(),
        }
    }
}

impl From<CompetitivenessError> for AppError {
    fn from(e: CompetitivenessError) -> Self {
        match e {
            CompetitivenessError::OriginNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            CompetitivenessError::MissingColumn { .. } => AppError::Config {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        let code = self.code();

        if status.is_server_error() {
            error!(%status, code, "{message}");
        } else {
            debug!(%status, code, "{message}");
        }

        let body = Json(ErrorResponse {
            error: message,
            code,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::competitiveness::EngineConfig;
    use crate::domain::{CityCoord, RouteRecord, columns};
    use crate::store::{DataContext, RowStore, Schema};

    fn context() -> DataContext {
        let mut route = RouteRecord::new("Manaus - AM", "Belém - PA");
        route.cost_baseline = Some(100.0);
        route.cost_lg = Some(80.0);
        route.emission_baseline = Some(200.0);
        route.emission_lg = Some(120.0);
        route.original_cost = Some(100.0);
        route.with_br319_cost = Some(100.0);
        route.is_lg10 = true;

        let mut coords = HashMap::new();
        coords.insert("Manaus - AM".to_string(), CityCoord::new(-3.1, -60.0, "AM"));

        let schema = Schema::new(
            columns::ENGINE_REQUIRED
                .iter()
                .copied()
                .chain([columns::ORIGIN_NAME, columns::DESTINATION_NAME]),
        );
        DataContext::new(
            RowStore::new(vec![route], schema),
            coords,
            EngineConfig::default(),
        )
    }

    fn ready() -> AppState {
        AppState::with_data(context(), "static")
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_loading_then_ok() {
        let state = AppState::new("static");
        assert_eq!(health(State(state.clone())).await, (StatusCode::OK, "loading"));

        assert!(state.publish(context()));
        assert_eq!(health(State(state.clone())).await, (StatusCode::OK, "ok"));

        // The first outcome sticks.
        assert!(!state.fail("late error"));
        assert_eq!(state.status(), LoadStatus::Ready);
    }

    #[tokio::test]
    async fn failed_load_is_reported_as_failed_not_loading() {
        let state = AppState::new("static");
        assert!(state.fail("failed to read data/dados.csv: No such file or directory"));

        assert_eq!(
            health(State(state.clone())).await,
            (StatusCode::SERVICE_UNAVAILABLE, "failed")
        );

        let response = list_cities(State(state.clone()))
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["code"], "load_failed");
        assert!(json["error"].as_str().unwrap().contains("dados.csv"));

        let err = competitiveness(
            State(state.clone()),
            Query(CompetitivenessRequest {
                origin: "Manaus".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::LoadFailed { .. }));

        // A later publish cannot resurrect the instance.
        assert!(!state.publish(context()));
        assert_eq!(state.status(), LoadStatus::Failed);
    }

    #[tokio::test]
    async fn data_endpoints_answer_503_before_load() {
        let state = AppState::new("static");

        let err = list_cities(State(state.clone())).await.unwrap_err();
        assert!(matches!(err, AppError::NotReady));

        let err = competitiveness(
            State(state),
            Query(CompetitivenessRequest {
                origin: "Manaus".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["code"], "not_ready");
    }

    #[tokio::test]
    async fn cities_are_listed() {
        let Json(body) = list_cities(State(ready())).await.unwrap();
        assert_eq!(body.cities, vec!["Belém - PA", "Manaus - AM"]);
    }

    #[tokio::test]
    async fn city_coords_are_keyed_by_name() {
        let response = city_coords(State(ready())).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["Manaus - AM"]["lat"], -3.1);
        assert_eq!(json["Manaus - AM"]["uf"], "AM");
        assert!(json.get("Belém - PA").is_none());
    }

    #[tokio::test]
    async fn route_lookup_found_and_missing() {
        let Json(found) = lookup_route(
            State(ready()),
            Json(RouteRequest {
                origin: "Manaus - AM".to_string(),
                destination: "Belém - PA".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(found.success);
        let info = found.info.unwrap();
        assert_eq!(info.route.cost_lg, Some(80.0));
        assert_eq!(info.origin_lat, Some(-3.1));
        assert_eq!(info.destination_lat, None);

        // Lookup is exact: no case folding or substring matching.
        let Json(missing) = lookup_route(
            State(ready()),
            Json(RouteRequest {
                origin: "manaus".to_string(),
                destination: "Belém - PA".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(!missing.success);
        assert_eq!(
            missing.message.as_deref(),
            Some("Route not found: manaus → Belém - PA")
        );
    }

    #[tokio::test]
    async fn competitiveness_resolves_partial_origin() {
        let Json(body) = competitiveness(
            State(ready()),
            Query(CompetitivenessRequest {
                origin: "manaus".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.total_destinos, 1);
        assert_eq!(body.destinos_competitivos, 1);
        assert_eq!(body.abrangencia, 100.0);
        assert_eq!(body.economia_media, 20.0);
        assert_eq!(body.co2_media, 80.0);
        assert_eq!(body.corredores.len(), 1);
        assert_eq!(body.alerta_br319_count, 0);
    }

    #[tokio::test]
    async fn competitiveness_errors() {
        let err = competitiveness(
            State(ready()),
            Query(CompetitivenessRequest {
                origin: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = competitiveness(
            State(ready()),
            Query(CompetitivenessRequest {
                origin: "Porto Velho".to_string(),
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "not_found");
    }

    #[test]
    fn missing_column_maps_to_config_error() {
        let err = AppError::from(CompetitivenessError::MissingColumn {
            column: columns::WITH_BR319_COST,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "config_error");
        assert!(err.message().contains(columns::WITH_BR319_COST));
    }

    #[tokio::test]
    async fn index_page_serves_file_or_404() {
        let dir = tempfile::tempdir().unwrap();

        let response = index_page(State(AppState::new(dir.path()))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::write(dir.path().join("index.html"), "<h1>RouteLab</h1>").unwrap();
        let response = index_page(State(AppState::new(dir.path()))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>RouteLab</h1>");
    }

    #[test]
    fn router_builds_with_invalid_cors_origin() {
        let _router = create_router(
            ready(),
            &["http://localhost:8000".to_string(), "bad\norigin".to_string()],
        );
    }
}
