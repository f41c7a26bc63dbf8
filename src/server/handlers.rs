use super::types::{HealthResponse, OriginListResponse, OriginResponse, RootResponse};
use super::upload::read_upload;
use crate::{
    Error, Result,
    analyze::{AnalyzeResult, Analyzer},
    config::Config,
    inference::{InferenceClient, PredictionResult},
    origin::{FeatureCollection, OriginStore},
};
use axum::{
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub inference: Arc<dyn InferenceClient>,
    pub origins: Arc<dyn OriginStore>,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(
        config: Config,
        inference: Arc<dyn InferenceClient>,
        origins: Arc<dyn OriginStore>,
    ) -> Self {
        let analyzer = Analyzer::new(inference.clone(), origins.clone());
        Self {
            config: Arc::new(config),
            inference,
            origins,
            analyzer,
        }
    }
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        service: state.config.app.name.clone(),
        version: state.config.app.version.clone(),
        health: "/health".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db_connected, inference_available) =
        tokio::join!(state.origins.is_available(), state.inference.health_check());

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.app.name.clone(),
        version: state.config.app.version.clone(),
        db_connected,
        inference_available,
    })
}

pub async fn predict(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResult>> {
    let upload = read_upload(multipart, state.config.server.max_upload_bytes).await?;
    info!(filename = %upload.filename, size = upload.data.len(), "Received image for prediction");

    let prediction = state.inference.predict(&upload.filename, &upload.data).await?;
    Ok(Json(prediction))
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResult>> {
    let upload = read_upload(multipart, state.config.server.max_upload_bytes).await?;
    let result = state.analyzer.analyze(&upload.filename, &upload.data).await?;
    Ok(Json(result))
}

pub async fn list_origins(State(state): State<AppState>) -> Result<Json<OriginListResponse>> {
    let data = state.origins.list_all().await?;
    Ok(Json(OriginListResponse {
        count: data.len(),
        data,
    }))
}

pub async fn origins_geojson(State(state): State<AppState>) -> Result<Json<FeatureCollection>> {
    let features = state.origins.list_as_geo_features().await?;
    Ok(Json(FeatureCollection::new(features)))
}

pub async fn get_origin(
    State(state): State<AppState>,
    Path(species): Path<String>,
) -> Result<Json<OriginResponse>> {
    match state.origins.find_by_species(&species).await? {
        Some(data) => Ok(Json(OriginResponse { data })),
        None => Err(Error::not_found(species)),
    }
}
