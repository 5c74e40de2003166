use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected response shape: expected {expected} for {context}, got {found}")]
    SchemaError {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot encode '{city}' into a request URL: {reason}")]
    EncodingError { city: String, reason: String },

    #[error("Refusing to overwrite existing file: {path}")]
    FileExistsError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Process exit status for this failure. Every kind is non-zero and
    /// distinct per failure family.
    pub fn exit_code(&self) -> i32 {
        match self {
            SuggestError::FileExistsError { .. }
            | SuggestError::IoError(_)
            | SuggestError::EncodingError { .. }
            | SuggestError::InvalidConfigValueError { .. } => 1,
            SuggestError::ApiError(_) => 2,
            SuggestError::ParseError(_) => 3,
            SuggestError::SchemaError { .. } => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SuggestError::ApiError(e) => format!("The suggest API could not be reached: {e}"),
            SuggestError::ParseError(e) => format!("The API response was not valid JSON: {e}"),
            SuggestError::SchemaError { .. } => format!("{self}"),
            SuggestError::EncodingError { city, .. } => {
                format!("The city name '{city}' could not be turned into a request URL")
            }
            SuggestError::FileExistsError { path } => {
                format!("Output file '{path}' already exists and will not be overwritten")
            }
            SuggestError::IoError(e) => format!("Could not write the output file: {e}"),
            SuggestError::InvalidConfigValueError { .. } => format!("{self}"),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SuggestError::ApiError(_) => "Check the network connection and the endpoint, then run again",
            SuggestError::ParseError(_) | SuggestError::SchemaError { .. } => {
                "Verify the endpoint returns a JSON array of suggestion objects"
            }
            SuggestError::EncodingError { .. } => "Check the city name and the --api-endpoint value",
            SuggestError::FileExistsError { .. } => {
                "Pick a different output file or remove the existing one"
            }
            SuggestError::IoError(_) => "Check permissions and free space on the output directory",
            SuggestError::InvalidConfigValueError { .. } => "Fix the flagged argument and run again",
        }
    }
}
