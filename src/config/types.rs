use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub form: FormDefaults,
}

/// Where the generation service lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Scheme + host + port (e.g., "http://127.0.0.1:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the generate call, appended to `base_url`.
    #[serde(default = "default_generate_path")]
    pub generate_path: String,
    /// Optional bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Initial values of the form controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_token_count")]
    pub token_count: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_generate_path() -> String {
    "/generate".to_string()
}

fn default_token_count() -> u32 {
    10
}

fn default_temperature() -> f64 {
    0.2
}

impl ServiceConfig {
    /// Full URL of the generate call.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.generate_path
        )
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            api_key: None,
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            token_count: default_token_count(),
            temperature: default_temperature(),
        }
    }
}
