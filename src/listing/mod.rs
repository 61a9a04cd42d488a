// Stock captured from the dealer pages, embedded in the binary.
pub mod data;

pub use data::LISTINGS;
