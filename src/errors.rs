/// Custom error types for the RoadBuddy TTS pipeline
#[derive(Debug, thiserror::Error)]
pub enum RBError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TTS synthesis error (status {status}): {body}")]
    Synthesis { status: u16, body: String },
}

impl RBError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    pub fn synthesis(status: u16, body: impl Into<String>) -> Self {
        Self::Synthesis {
            status,
            body: body.into(),
        }
    }

    pub fn missing_env_var(var_name: &str) -> Self {
        Self::Config(format!("Missing environment variable: {}", var_name))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RBError>;

/// Constants used throughout the application
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

    // ElevenLabs API constants
    pub const DEFAULT_API_URL: &str = "https://api.elevenlabs.io";
    pub const TTS_TIMEOUT_SECS: u64 = 30;

    // Voice tuning defaults, sent with every request
    pub const DEFAULT_STABILITY: f32 = 0.5;
    pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.75;

    // Pipeline defaults
    pub const DEFAULT_OUTPUT_FILE: &str = "output.mp3";
    pub const DEFAULT_PROMPT: &str = "Test prompt";
}
