use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Image file is required")]
    FileRequired,

    #[error("Failed to read uploaded file: {0}")]
    FileRead(String),

    #[error("File size exceeds maximum of {limit} bytes")]
    FileTooLarge { limit: usize },

    #[error("Inference service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("{code}: {message}")]
    Remote {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Malformed inference response: {0}")]
    Protocol(String),

    #[error("Species '{species}' not found")]
    NotFound { species: String },

    #[error("Database connection not available: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn file_read(msg: impl Into<String>) -> Self {
        Self::FileRead(msg.into())
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    pub fn remote(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    pub fn not_found(species: impl Into<String>) -> Self {
        Self::NotFound {
            species: species.into(),
        }
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code used in the error envelope.
    pub fn code(&self) -> &str {
        match self {
            Self::FileRequired => "FILE_REQUIRED",
            Self::FileRead(_) => "FILE_READ_ERROR",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Remote { code, .. } => code.as_str(),
            Self::Protocol(_) => "PROTOCOL_ERROR",
            Self::NotFound { .. } => "SPECIES_NOT_FOUND",
            Self::StoreUnavailable(_) => "DB_NOT_CONNECTED",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to API clients. Catch-all variants hide their details.
    pub fn public_message(&self) -> String {
        match self {
            Self::FileRequired | Self::FileTooLarge { .. } | Self::NotFound { .. } => {
                self.to_string()
            }
            Self::FileRead(_) => "Failed to read uploaded file".to_string(),
            Self::ServiceUnavailable(_) => "Inference service is unavailable".to_string(),
            Self::Remote { message, .. } => message.clone(),
            Self::Protocol(_) => "Inference service returned a malformed response".to_string(),
            Self::StoreUnavailable(_) => "Database connection not available".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
