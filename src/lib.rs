// Robustcar listings - normalizes embedded dealer stock into categorized JSON records.

pub mod analyzer;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod listing;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod storage;

pub use analyzer::{CategoryCounts, PriceStats, Summary};
pub use builder::{build_record, build_records};
pub use classifier::classify;
pub use config::{load_config, AppConfig};
pub use listing::LISTINGS;
pub use model::{AppError, Category, ConfigError, RawListing, SinkError, VehicleRecord};
pub use normalizer::{normalize_fuel, normalize_mileage, normalize_price, normalize_year};
pub use pipeline::{run, PipelineOutput};
pub use report::Report;
pub use storage::JsonSink;
