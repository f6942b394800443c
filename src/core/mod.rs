pub mod aggregate;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{IntentSummary, LoanRecord, OUTPUT_FILE_NAME};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
