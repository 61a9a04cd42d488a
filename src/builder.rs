// Turns raw listing cards into normalized records.
use crate::classifier::classify;
use crate::model::{RawListing, VehicleRecord};
use crate::normalizer::{normalize_fuel, normalize_mileage, normalize_price, normalize_year};

pub fn build_record(listing: &RawListing, base_url: &str) -> VehicleRecord {
    VehicleRecord {
        brand: listing.brand.to_string(),
        model: listing.model.to_string(),
        version: listing.version.to_string(),
        year: normalize_year(listing.year),
        mileage: normalize_mileage(listing.mileage),
        fuel: normalize_fuel(listing.fuel),
        color: listing.color.to_string(),
        price: normalize_price(listing.price),
        detail_url: format!("{}{}", base_url, listing.detail_url),
        category: classify(listing.model),
    }
}

/// One record per listing, in listing order.
pub fn build_records(listings: &[RawListing], base_url: &str) -> Vec<VehicleRecord> {
    listings
        .iter()
        .map(|listing| build_record(listing, base_url))
        .collect()
}
