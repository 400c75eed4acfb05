use std::env;

/// Connection settings for a Weaviate backend, loaded from environment
/// variables with development defaults. Collection naming and credentials
/// stay out of the core components; store clients consume this directly.
#[derive(Debug, Clone)]
pub struct WeaviateConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Collection the adapter targets.
    pub class_name: String,
}

impl WeaviateConfig {
    /// Load from `WEAVIATE_SCHEME` / `WEAVIATE_HOST` / `WEAVIATE_PORT` /
    /// `WEAVIATE_CLASS`, falling back to local defaults.
    pub fn from_env() -> Self {
        Self {
            scheme: env::var("WEAVIATE_SCHEME").unwrap_or_else(|_| "http".to_string()),
            host: env::var("WEAVIATE_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("WEAVIATE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("WEAVIATE_PORT must be a valid u16"),
            class_name: env::var("WEAVIATE_CLASS").unwrap_or_else(|_| "ContentItem".to_string()),
        }
    }

    /// Base URL for the store's HTTP API.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8080,
            class_name: "ContentItem".to_string(),
        }
    }
}
