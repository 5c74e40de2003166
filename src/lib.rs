pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::{CliConfig, LocalStorage};

pub use core::{etl::EtlEngine, pipeline::SuggestPipeline};
pub use utils::error::{Result, SuggestError};
