//! dropsel - headless scenario runner for the dropsel_ui dropdown
//!
//! Loads a JSON scenario describing a page, a dropdown and a list of
//! interactions, replays it and reports what the widget did.

pub mod config;
pub mod error;
pub mod scenario;

pub use config::{LogLevel, Scenario, Step};
pub use error::ScenarioError;
pub use scenario::{run, CloseReason, Outcome, Transcript};
