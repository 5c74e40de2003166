use crate::domain::model::{CsvDocument, Suggestion};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Creates `path` and writes `data` to it. Fails if the file already
    /// exists; overwriting is never supported.
    fn write_new(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn city(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Suggestion>>;
    async fn transform(&self, suggestions: Vec<Suggestion>) -> Result<CsvDocument>;
    async fn load(&self, document: CsvDocument) -> Result<String>;
}
