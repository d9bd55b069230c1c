//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use textgen_tui::generation::{
    GenerationRequest, GenerationResult, GenerationService, ServiceError,
};
use tokio::sync::Notify;

/// What a [`ScriptedService`] does on its next call.
pub enum Script {
    Respond(GenerationResult),
    /// Fail the call with a 503 carrying this message.
    Fail(String),
    Panic(String),
    /// Wait until `release` is notified, then answer.
    Hold {
        release: Arc<Notify>,
        result: GenerationResult,
    },
    /// Never settle.
    Hang,
}

/// In-process service that records requests and replays scripted answers.
#[derive(Default)]
pub struct ScriptedService {
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedService {
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> Arc<Self> {
        Arc::new(Self {
            scripts: Mutex::new(scripts.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(text: &str) -> Arc<Self> {
        Self::new([Script::Respond(GenerationResult::Success {
            text: text.to_string(),
        })])
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }
}

impl GenerationService for ScriptedService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, ServiceError> {
        self.requests.lock().push(request);
        let script = self
            .scripts
            .lock()
            .pop_front()
            .unwrap_or(Script::Respond(GenerationResult::Unrecognized));

        match script {
            Script::Respond(result) => Ok(result),
            Script::Fail(message) => Err(ServiceError::Upstream {
                status: 503,
                message,
            }),
            Script::Panic(message) => panic!("{}", message),
            Script::Hold { release, result } => {
                release.notified().await;
                Ok(result)
            }
            Script::Hang => std::future::pending().await,
        }
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
