use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f64,
}

/// Classification returned by the inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_class: String,
    pub confidence: f64,
    #[serde(default)]
    pub all_predictions: Vec<ClassPrediction>,
}

impl PredictionResult {
    /// Returns a description of the first broken invariant, if any.
    pub fn validate(&self) -> Option<String> {
        if self.predicted_class.trim().is_empty() {
            return Some("predicted_class is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Some(format!("confidence {} is outside [0, 1]", self.confidence));
        }
        None
    }
}

/// Structured error body emitted by the inference service on non-200 responses.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub error: bool,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DetailWrapper {
    pub detail: RemoteErrorBody,
}
