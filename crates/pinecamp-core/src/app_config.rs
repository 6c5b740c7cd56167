use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory backing the file storage, one `<key>.json` per key.
    pub data_dir: PathBuf,
    /// Storage key holding the inquiry log.
    pub store_key: String,
}
