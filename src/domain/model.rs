use serde::{Deserialize, Serialize};

/// Name of the summary file written to the output directory.
pub const OUTPUT_FILE_NAME: &str = "loan_intent_analysis.csv";

/// One input row after parsing. Intent and grade are trimmed; numeric
/// fields that fail to parse are carried as `None` (absent) rather than
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub intent: String,
    pub grade: String,
    pub amount: Option<f64>,
    pub rate: Option<f64>,
}

/// Per-intent aggregate. Averages stay 0.0 and the grade stays empty when
/// the group has no usable values for that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSummary {
    pub intent: String,
    pub most_common_grade: String,
    pub avg_amount: f64,
    pub avg_interest_rate: f64,
}
