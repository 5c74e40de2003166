pub mod etl;
pub mod format;
pub mod pipeline;
pub mod url;

pub use crate::domain::model::{CsvDocument, Suggestion};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
