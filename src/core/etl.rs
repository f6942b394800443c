use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting loan intent analysis...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let summaries = self.pipeline.transform(records)?;
        tracing::info!("Aggregated into {} intent groups", summaries.len());

        // Load
        let output_path = self.pipeline.load(summaries)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
