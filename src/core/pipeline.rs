use crate::core::aggregate;
use crate::core::{ConfigProvider, IntentSummary, LoanRecord, Pipeline, Storage, OUTPUT_FILE_NAME};
use crate::utils::error::{EtlError, Result};

const COL_INTENT: &str = "loan_intent";
const COL_GRADE: &str = "loan_grade";
const COL_AMOUNT: &str = "loan_amnt";
const COL_RATE: &str = "loan_int_rate";

pub struct LoanIntentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LoanIntentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LoanIntentPipeline<S, C> {
    fn extract(&self) -> Result<Vec<LoanRecord>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        // Flexible row lengths: short rows mean absent fields, not errors.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        // First occurrence wins when a header is duplicated.
        let position = |name: &str| headers.iter().position(|h| h == name);
        let intent_col = position(COL_INTENT);
        let grade_col = position(COL_GRADE);
        let amount_col = position(COL_AMOUNT);
        let rate_col = position(COL_RATE);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("");

            let intent = field(intent_col).trim();
            if intent.is_empty() {
                continue;
            }

            records.push(LoanRecord {
                intent: intent.to_string(),
                grade: field(grade_col).trim().to_string(),
                amount: aggregate::parse_numeric(field(amount_col)),
                rate: aggregate::parse_numeric(field(rate_col)),
            });
        }

        Ok(records)
    }

    fn transform(&self, data: Vec<LoanRecord>) -> Result<Vec<IntentSummary>> {
        Ok(aggregate::summarize(data))
    }

    fn load(&self, summaries: Vec<IntentSummary>) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            COL_INTENT,
            "most_common_grade",
            "avg_amount",
            "avg_interest_rate",
        ])?;

        for summary in &summaries {
            let avg_amount = format!("{:.2}", summary.avg_amount);
            let avg_rate = format!("{:.2}", summary.avg_interest_rate);
            writer.write_record([
                summary.intent.as_str(),
                summary.most_common_grade.as_str(),
                avg_amount.as_str(),
                avg_rate.as_str(),
            ])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))?;

        self.storage.write_file(OUTPUT_FILE_NAME, &data)?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE_NAME))
    }
}
