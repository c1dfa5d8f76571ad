//! Error types for loading scenarios.

use thiserror::Error;

/// Errors that can occur while loading a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// I/O error while reading the scenario file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario parsed but describes an impossible page
    #[error("Invalid scenario: {message}")]
    InvalidScenario {
        /// Description of the problem
        message: String,
    },
}

impl ScenarioError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            message: message.into(),
        }
    }
}
