use async_trait::async_trait;
use beanspect_rust::{
    Error, Result,
    inference::{ClassPrediction, InferenceClient, PredictionResult},
    origin::{OriginRecord, OriginStore},
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a [`MockInferenceClient`] answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Prediction(PredictionResult),
    Unavailable(String),
    Remote { status: u16, code: String, message: String },
    Protocol(String),
}

/// Mock inference client that counts calls
#[derive(Debug)]
pub struct MockInferenceClient {
    pub outcome: MockOutcome,
    pub healthy: bool,
    calls: AtomicUsize,
}

impl MockInferenceClient {
    pub fn predicting(class: &str, confidence: f64) -> Self {
        Self::with_outcome(MockOutcome::Prediction(prediction(class, confidence)))
    }

    pub fn unavailable() -> Self {
        let mut client = Self::with_outcome(MockOutcome::Unavailable(
            "connection refused".to_string(),
        ));
        client.healthy = false;
        client
    }

    pub fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn predict(&self, _filename: &str, _image: &[u8]) -> Result<PredictionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Prediction(p) => Ok(p.clone()),
            MockOutcome::Unavailable(msg) => Err(Error::service_unavailable(msg.clone())),
            MockOutcome::Remote {
                status,
                code,
                message,
            } => Err(Error::remote(*status, code.clone(), message.clone())),
            MockOutcome::Protocol(msg) => Err(Error::protocol(msg.clone())),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// In-memory origin store
#[derive(Debug, Default)]
pub struct MockOriginStore {
    pub origins: Vec<OriginRecord>,
}

impl MockOriginStore {
    pub fn with_origins(origins: Vec<OriginRecord>) -> Self {
        Self { origins }
    }
}

#[async_trait]
impl OriginStore for MockOriginStore {
    async fn find_by_species(&self, species: &str) -> Result<Option<OriginRecord>> {
        Ok(self.origins.iter().find(|o| o.species == species).cloned())
    }

    async fn list_all(&self) -> Result<Vec<OriginRecord>> {
        Ok(self.origins.clone())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Origin store whose backend is down
#[derive(Debug, Default)]
pub struct UnavailableOriginStore;

#[async_trait]
impl OriginStore for UnavailableOriginStore {
    async fn find_by_species(&self, _species: &str) -> Result<Option<OriginRecord>> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn list_all(&self) -> Result<Vec<OriginRecord>> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn is_available(&self) -> bool {
        false
    }
}

pub fn prediction(class: &str, confidence: f64) -> PredictionResult {
    let rest = (1.0 - confidence) / 3.0;
    let mut all_predictions = vec![ClassPrediction {
        class_name: class.to_string(),
        confidence,
    }];
    for other in ["arabica", "robusta", "liberica", "excelsa"] {
        if other != class && all_predictions.len() < 4 {
            all_predictions.push(ClassPrediction {
                class_name: other.to_string(),
                confidence: rest,
            });
        }
    }

    PredictionResult {
        predicted_class: class.to_string(),
        confidence,
        all_predictions,
    }
}
