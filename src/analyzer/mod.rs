// Analyzer module: per-category counts and price statistics over built records.

pub mod category_counts;
pub mod price_stats;

pub use category_counts::CategoryCounts;
pub use price_stats::PriceStats;

use crate::model::{Category, VehicleRecord};

/// Aggregates computed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub categories: CategoryCounts,
    pub prices: PriceStats,
}

impl Summary {
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        Self {
            total: records.len(),
            categories: CategoryCounts::from_records(records),
            prices: PriceStats::from_records(records),
        }
    }

    /// Categories by count, highest first.
    pub fn ranked(&self) -> Vec<(Category, usize)> {
        self.categories.ranked()
    }
}
