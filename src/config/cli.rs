use crate::core::Storage;
use crate::utils::error::{Result, SuggestError};
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};

#[cfg(feature = "cli")]
use super::CliConfig;
#[cfg(feature = "cli")]
use crate::core::url::DEFAULT_API_ENDPOINT;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "suggest-csv")]
#[command(about = "Queries the position-suggest API for a city and saves the matches as CSV")]
pub struct Cli {
    /// Output file when CITY follows, otherwise the city name itself
    #[arg(value_name = "FILE|CITY")]
    pub first: String,

    /// City name to query when an output file is given first
    #[arg(value_name = "CITY")]
    pub second: Option<String>,

    /// Override the suggest API endpoint
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory usage per phase
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    /// Resolves the positional arguments: with two the first is the
    /// output file and the second the city; with one the sole argument
    /// is the city and the output defaults to `<city>.csv`.
    pub fn into_config(self) -> CliConfig {
        let (output_path, city) = match self.second {
            Some(city) => (self.first, city),
            None => (format!("{}.csv", self.first), self.first),
        };

        CliConfig {
            api_endpoint: self.api_endpoint,
            city,
            output_path,
            verbose: self.verbose,
            monitor: self.monitor,
        }
    }
}

/// Filesystem sink for the CSV output. The file is created with
/// `create_new`, so an existing file (or the loser of a concurrent
/// race) fails cleanly instead of being overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    async fn write_new(&self, path: &str, data: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SuggestError::FileExistsError {
                    path: path.to_string(),
                },
                _ => SuggestError::IoError(e),
            })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(data)?;
        writer.flush()?;
        Ok(())
    }
}
