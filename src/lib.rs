pub mod client;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use client::CircleClient;
pub use config::ClientConfig;
pub use domain::model::{Fact, FactPayload, Group, GroupPayload, Health, Person, PersonPayload};
pub use utils::error::{ApiError, Result};
