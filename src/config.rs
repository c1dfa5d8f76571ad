//! Scenario file support for dropsel.
//!
//! A scenario describes one dropdown on a page and a sequence of interactions
//! to replay against it. Scenarios are stored as JSON.

use std::path::Path;

use dropsel_ui::{Bounds, DropdownConfig, MouseButton, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Log level setting for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Name understood by `env_logger` filters.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// One interaction in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Press at a client (viewport) position
    Click {
        x: f32,
        y: f32,
        #[serde(default)]
        button: MouseButton,
    },
    /// Scroll the page by a delta
    Scroll { dx: f32, dy: f32 },
    /// Resize the viewport
    Resize { width: f32, height: f32 },
    /// Hand the dropdown a new option list
    SetOptions { options: Vec<String> },
}

/// A complete scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub viewport: Viewport,
    /// Header rectangle in page coordinates
    pub header: Bounds,
    pub dropdown: DropdownConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        log::debug!("Loading scenario from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the page geometry. Option contents are not checked.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let vp = &self.viewport;
        if !(vp.width.is_finite() && vp.height.is_finite()) || vp.width <= 0.0 || vp.height <= 0.0 {
            return Err(ScenarioError::invalid(format!(
                "viewport must have a positive size, got {}x{}",
                vp.width, vp.height
            )));
        }
        if !all_finite(&[vp.scroll_x, vp.scroll_y]) || vp.scroll_x < 0.0 || vp.scroll_y < 0.0 {
            return Err(ScenarioError::invalid(format!(
                "scroll offsets must be finite and not negative, got ({}, {})",
                vp.scroll_x, vp.scroll_y
            )));
        }
        let h = &self.header;
        if !all_finite(&[h.x, h.y, h.width, h.height]) {
            return Err(ScenarioError::invalid(format!(
                "header must have finite bounds, got ({}, {}) {}x{}",
                h.x, h.y, h.width, h.height
            )));
        }
        if h.width < 0.0 || h.height < 0.0 {
            return Err(ScenarioError::invalid(format!(
                "header size must not be negative, got {}x{}",
                h.width, h.height
            )));
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Click { x, y, .. } if !all_finite(&[*x, *y]) => {
                    return Err(ScenarioError::invalid(format!(
                        "step {i}: click at ({x}, {y})"
                    )));
                }
                Step::Scroll { dx, dy } if !all_finite(&[*dx, *dy]) => {
                    return Err(ScenarioError::invalid(format!(
                        "step {i}: scroll by ({dx}, {dy})"
                    )));
                }
                Step::Resize { width, height }
                    if !all_finite(&[*width, *height]) || *width <= 0.0 || *height <= 0.0 =>
                {
                    return Err(ScenarioError::invalid(format!(
                        "step {i}: resize to {width}x{height}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// A short scenario exercising both placement directions and both ways of closing.
    pub fn demo() -> Self {
        let options = ["Apple", "Banana", "Cherry"]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            log_level: LogLevel::Info,
            viewport: Viewport::new(1024.0, 800.0),
            header: Bounds::new(40.0, 700.0, 160.0, 24.0),
            dropdown: DropdownConfig::new("fruit", options).placeholder("Pick a fruit"),
            steps: vec![
                // Near the bottom edge: opens upward, rows start at y=500
                Step::Click { x: 60.0, y: 710.0, button: MouseButton::Left },
                Step::Click { x: 60.0, y: 530.0, button: MouseButton::Left },
                // Scroll the header up so there is room below
                Step::Scroll { dx: 0.0, dy: 500.0 },
                Step::Click { x: 60.0, y: 210.0, button: MouseButton::Left },
                // Press somewhere else on the page
                Step::Click { x: 900.0, y: 600.0, button: MouseButton::Left },
            ],
        }
    }
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}
