// Core structs: RawListing, VehicleRecord, Category
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One stock entry as captured from the dealer pages. Every field is the raw text shown on
/// the listing card.
#[derive(Debug, Clone, Copy)]
pub struct RawListing {
    pub brand: &'static str,
    pub model: &'static str,
    pub version: &'static str,
    pub year: &'static str,
    pub mileage: &'static str,
    pub fuel: &'static str,
    pub color: &'static str,
    pub price: &'static str,
    pub detail_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Moto,
    Pickup,
    Minivan,
    Suv,
    Sedan,
    Hatch,
    Outros,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Moto => "MOTO",
            Category::Pickup => "PICKUP",
            Category::Minivan => "MINIVAN",
            Category::Suv => "SUV",
            Category::Sedan => "SEDAN",
            Category::Hatch => "HATCH",
            Category::Outros => "OUTROS",
        }
    }

    /// Body type shown by the storefront once the catalog is seeded.
    pub fn body_type(&self) -> &'static str {
        match self {
            Category::Moto => "Moto",
            Category::Pickup => "Picape",
            Category::Minivan => "Minivan",
            Category::Suv => "SUV",
            Category::Sedan => "Sedan",
            Category::Hatch => "Hatchback",
            Category::Outros => "Outros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized listing, serialized as one element of the output array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub version: String,
    pub year: u16,
    pub mileage: u64,
    pub fuel: String,
    pub color: String,
    /// `None` when the dealer asks to be consulted or the text could not be read.
    pub price: Option<f64>,
    #[serde(rename = "detailUrl")]
    pub detail_url: String,
    pub category: Category,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
