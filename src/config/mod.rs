pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "loan-intent-etl")]
#[command(about = "Aggregate loan applications by intent into a summary CSV")]
pub struct CliConfig {
    /// Input CSV with loan_intent, loan_grade, loan_amnt, loan_int_rate columns
    #[arg(default_value = "LoansDataset.csv")]
    pub input_path: String,

    /// Directory the summary file is written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_non_empty_string("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        Ok(())
    }
}
