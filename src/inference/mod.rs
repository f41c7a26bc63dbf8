mod client;
mod types;

pub use client::{HttpInferenceClient, InferenceClient, mime_type_for};
pub use types::{ClassPrediction, PredictionResult, RemoteErrorBody};
