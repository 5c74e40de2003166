pub mod cli;

pub use cli::LocalStorage;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, SuggestError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Fully resolved runtime configuration for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub api_endpoint: String,
    pub city: String,
    pub output_path: String,
    pub verbose: bool,
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("city", &self.city)?;
        validation::validate_path("output_path", &self.output_path)?;

        // Overwriting is never supported; bail out here so a collision
        // is reported before any network traffic.
        if std::path::Path::new(&self.output_path).exists() {
            return Err(SuggestError::FileExistsError {
                path: self.output_path.clone(),
            });
        }

        Ok(())
    }
}
