use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

/// Address of the social-circle service. The service speaks plain HTTP on a
/// fixed local port; point `base_url` elsewhere to target another instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "circle-client")]
#[command(about = "Command-line client for the social-circle service")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl From<CliConfig> for ClientConfig {
    fn from(cli: CliConfig) -> Self {
        Self {
            base_url: cli.base_url,
        }
    }
}
