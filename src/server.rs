use crate::config::AppConfig;
use crate::error::PageParseError;
use crate::page::{render_page, Page, ViewSpec};
use crate::render::render_document;
use crate::types::DonationRecord;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

/// Records are built once at startup and shared read-only by every request.
pub struct AppState {
    pub records: Vec<DonationRecord>,
    pub config: AppConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    fn selection(&self) -> Result<Page, PageParseError> {
        match &self.page {
            Some(name) => name.parse(),
            None => Ok(Page::default()),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadPage(PageParseError),
    Render(anyhow::Error),
}

impl From<PageParseError> for ApiError {
    fn from(err: PageParseError) -> Self {
        ApiError::BadPage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadPage(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Render(err) => {
                error!("Failed to render page: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page".to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/records", get(records_handler))
        .route("/api/view", get(view_handler))
        .route("/api/points.geojson", get(points_geojson_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: AppConfig, records: Vec<DonationRecord>) -> Result<()> {
    let addr = config.server.socket_addr();
    let state = Arc::new(AppState { records, config });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}

async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let page = query.selection()?;
    debug!("Rendering {} page", page);
    let view = render_page(page, &state.records, &state.config);
    let html = render_document(&view).map_err(ApiError::Render)?;
    Ok(Html(html))
}

async fn view_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ViewSpec>, ApiError> {
    let page = query.selection()?;
    Ok(Json(render_page(page, &state.records, &state.config)))
}

async fn records_handler(State(state): State<Arc<AppState>>) -> Json<Vec<DonationRecord>> {
    Json(state.records.clone())
}

async fn points_geojson_handler(State(state): State<Arc<AppState>>) -> Json<FeatureCollection> {
    Json(points_feature_collection(&state.records))
}

pub fn points_feature_collection(records: &[DonationRecord]) -> FeatureCollection {
    let features = records
        .iter()
        .map(|record| {
            let mut properties = JsonObject::new();
            properties.insert("city".to_string(), record.city().into());
            properties.insert("donations".to_string(), record.donation_count().into());
            properties.insert("total_amount".to_string(), record.total_amount().into());
            properties.insert("tooltip".to_string(), record.tooltip_text().into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::from(&record.point()))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
