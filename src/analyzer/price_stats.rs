use crate::model::VehicleRecord;

/// Price overview for the listings that show an amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceStats {
    pub priced: usize,
    /// Listings whose price is absent, either "Consulte" or unreadable.
    pub on_request: usize,
    pub avg_price: Option<f64>,
    pub std_dev: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl PriceStats {
    /// Calculates average, standard deviation and range over the priced records.
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        let prices: Vec<f64> = records.iter().filter_map(|r| r.price).collect();
        let on_request = records.len() - prices.len();

        if prices.is_empty() {
            return Self {
                on_request,
                ..Self::default()
            };
        }

        let count = prices.len() as f64;
        let avg = prices.iter().sum::<f64>() / count;
        let std_dev = (prices.iter().map(|p| (p - avg).powi(2)).sum::<f64>() / count).sqrt();
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            priced: prices.len(),
            on_request,
            avg_price: Some(avg),
            std_dev: Some(std_dev),
            min_price: Some(min),
            max_price: Some(max),
        }
    }
}
