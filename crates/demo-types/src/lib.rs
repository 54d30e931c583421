//! Demo Types - Pure type definitions shared by the demo APIs
//!
//! This crate contains only serde data types with no runtime dependencies.

pub mod article;
pub mod hero;

pub use article::*;
pub use hero::*;

use serde::{Deserialize, Serialize};

/// Version reported by the info endpoint
pub const API_VERSION: &str = "0.1";

/// Response body of `POST /info/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: API_VERSION.to_string(),
        }
    }
}

/// Response body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_default() {
        let json = serde_json::to_value(VersionInfo::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "version": "0.1" }));
    }
}
