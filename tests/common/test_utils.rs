use beanspect_rust::{
    Result,
    config::{Config, InferenceConfig},
    origin::{OriginRecord, OriginStorage, seed},
};
use tempfile::TempDir;

pub const MULTIPART_BOUNDARY: &str = "beanspect-test-boundary";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.database_path = ":memory:".to_string();
    config.server.logs.level = "debug".to_string();
    config.app.name = "BeanSpect Test".to_string();
    config.app.version = "0.0.1-test".to_string();
    config
}

pub fn inference_config(base_url: &str, timeout_secs: u64) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        timeout_secs,
        health_timeout_secs: 1,
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Migrated and seeded storage backed by a file in a temp dir
pub async fn create_seeded_storage() -> Result<(TempDir, OriginStorage)> {
    let temp_dir = create_temp_dir();
    let db_path = temp_dir.path().join("origins.db");
    let storage = OriginStorage::new(&db_path.to_string_lossy()).await?;
    storage.migrate().await?;
    storage.seed().await?;
    Ok((temp_dir, storage))
}

pub fn seeded_origins() -> Vec<OriginRecord> {
    seed::default_origins()
        .into_iter()
        .enumerate()
        .map(|(i, mut origin)| {
            origin.id = Some(i as i64 + 1);
            origin
        })
        .collect()
}

/// Build a multipart/form-data body with a single file part
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}
