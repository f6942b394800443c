use crate::domain::model::{IntentSummary, LoanRecord};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<LoanRecord>>;
    fn transform(&self, data: Vec<LoanRecord>) -> Result<Vec<IntentSummary>>;
    fn load(&self, summaries: Vec<IntentSummary>) -> Result<String>;
}
