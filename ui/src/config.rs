//! Runtime configuration read from the process environment.
//!
//! - `ALUMNI_DATA`: path to a JSON array of alumni records
//! - `ALUMNI_QUERY`: search text to start with

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub alumni_data: Option<PathBuf>,
    #[serde(default)]
    pub alumni_query: Option<String>,
}

impl AppConfig {
    /// Reads the configuration, falling back to defaults when the
    /// environment cannot be decoded.
    pub fn from_env() -> Self {
        match serde_env::from_env::<Self>() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring invalid environment configuration: {err}");
                Self::default()
            }
        }
    }
}
