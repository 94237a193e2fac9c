//! JSON API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::SharedService;
use crate::domain::{FeatureVector, ModelSummary};

/// Body of `POST /predict`. All three fields are required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictRequest {
    pub param1: f64,
    pub param2: f64,
    pub param3: f64,
}

impl From<PredictRequest> for FeatureVector {
    fn from(req: PredictRequest) -> Self {
        FeatureVector::new(req.param1, req.param2, req.param3)
    }
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Remaining useful life in hours
    pub predicted_rul: f64,
}

/// `POST /predict`
pub async fn predict(
    State(service): State<SharedService>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(req) = payload?;
    let prediction = service.predict(req.into())?;

    Ok(Json(PredictResponse {
        predicted_rul: prediction.hours,
    }))
}

/// `GET /health`
pub async fn health(State(service): State<SharedService>) -> Json<ModelSummary> {
    Json(service.summary().clone())
}
