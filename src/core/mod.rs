//! Core utilities for the Sleeper fantasy football service
//!
//! This module consolidates the plumbing shared by the CLI and the server:
//! - `config`: layered engine configuration
//! - `http`: upstream HTTP client construction

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{config_path, EngineConfig, SLEEPER_BASE_URL};
pub use http::{build_client, common_headers};
