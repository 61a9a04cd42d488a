use crate::analyzer::Summary;
use crate::builder::build_records;
use crate::config::AppConfig;
use crate::model::{RawListing, VehicleRecord};
use tracing::info;

pub struct PipelineOutput {
    pub records: Vec<VehicleRecord>,
    pub summary: Summary,
}

/// Builds records and aggregates from the given listings. No I/O happens here.
pub fn run(listings: &[RawListing], config: &AppConfig) -> PipelineOutput {
    info!("Normalizing {} listings...", listings.len());
    let records = build_records(listings, &config.base_url);

    let summary = Summary::from_records(&records);
    info!(
        "Built {} records across {} categories",
        summary.total,
        summary.categories.entries().len()
    );

    PipelineOutput { records, summary }
}
