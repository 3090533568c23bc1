//! Server configuration.

/// Server configuration.
pub struct Config {
    /// HTTP server bind address.
    pub bind_addr: String,

    /// Origins allowed to make cross-origin requests.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}
