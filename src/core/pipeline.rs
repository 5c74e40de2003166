use crate::core::format::{format_record, json_type_name};
use crate::core::url::build_suggest_url;
use crate::core::{ConfigProvider, CsvDocument, Pipeline, Storage, Suggestion};
use crate::utils::error::{Result, SuggestError};
use reqwest::Client;
use serde_json::Value;

pub struct SuggestPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SuggestPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SuggestPipeline<S, C> {
    /// One GET against the suggest endpoint, decoded into the raw
    /// suggestion objects. A non-success status is an error; there is
    /// no retry and no fallback data.
    async fn extract(&self) -> Result<Vec<Suggestion>> {
        let url = build_suggest_url(self.config.api_endpoint(), self.config.city())?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.text().await?;
        let decoded: Value = serde_json::from_str(&body)?;

        let items = match decoded {
            Value::Array(items) => items,
            other => {
                return Err(SuggestError::SchemaError {
                    context: "response body".to_string(),
                    expected: "array",
                    found: json_type_name(&other),
                })
            }
        };

        let mut suggestions = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(fields) => suggestions.push(Suggestion { fields }),
                other => {
                    return Err(SuggestError::SchemaError {
                        context: "response array element".to_string(),
                        expected: "object",
                        found: json_type_name(&other),
                    })
                }
            }
        }

        Ok(suggestions)
    }

    /// Formats each suggestion as one CSV line, keeping array order.
    async fn transform(&self, suggestions: Vec<Suggestion>) -> Result<CsvDocument> {
        let mut lines = Vec::with_capacity(suggestions.len());
        for suggestion in &suggestions {
            lines.push(format_record(suggestion)?);
        }
        Ok(CsvDocument { lines })
    }

    async fn load(&self, document: CsvDocument) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::debug!("Writing {} lines to {}", document.lines.len(), output_path);
        self.storage
            .write_new(output_path, &document.to_bytes())
            .await?;
        Ok(output_path.to_string())
    }
}
