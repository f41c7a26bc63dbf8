//! Image analysis: classify an upload, then enrich it with origin data.

use crate::{
    Error, Result,
    inference::{ClassPrediction, InferenceClient, PredictionResult},
    origin::{OriginRecord, OriginStore},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub species: String,
    pub confidence: f64,
    pub all_predictions: Vec<ClassPrediction>,
}

impl From<PredictionResult> for PredictionSummary {
    fn from(prediction: PredictionResult) -> Self {
        Self {
            species: prediction.predicted_class,
            confidence: prediction.confidence,
            all_predictions: prediction.all_predictions,
        }
    }
}

/// Prediction plus its origin record, if one could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResult {
    pub prediction: PredictionSummary,
    pub origin: Option<OriginRecord>,
}

#[derive(Clone)]
pub struct Analyzer {
    inference: Arc<dyn InferenceClient>,
    origins: Arc<dyn OriginStore>,
}

impl Analyzer {
    pub fn new(inference: Arc<dyn InferenceClient>, origins: Arc<dyn OriginStore>) -> Self {
        Self { inference, origins }
    }

    /// Inference failures fail the call. Origin lookup failures only drop the
    /// `origin` field.
    pub async fn analyze(&self, filename: &str, image: &[u8]) -> Result<AnalyzeResult> {
        if image.is_empty() {
            return Err(Error::FileRequired);
        }

        info!(filename, size = image.len(), "Received image for analysis");

        let prediction = self.inference.predict(filename, image).await?;

        let origin = match self.origins.find_by_species(&prediction.predicted_class).await {
            Ok(Some(origin)) => {
                info!(species = %origin.species, country = %origin.country, "Fetched origin data");
                Some(origin)
            }
            Ok(None) => {
                warn!(species = %prediction.predicted_class, "Origin data not found for species");
                None
            }
            Err(e) => {
                warn!(
                    species = %prediction.predicted_class,
                    "Skipping origin data, lookup failed: {}", e
                );
                None
            }
        };

        info!("Analysis complete");
        Ok(AnalyzeResult {
            prediction: prediction.into(),
            origin,
        })
    }
}
