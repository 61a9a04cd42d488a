// Human-readable run summary printed to stdout.
use crate::analyzer::Summary;
use crate::model::VehicleRecord;
use std::fmt;
use std::path::Path;

pub const PRICE_ON_REQUEST_LABEL: &str = "Consulte";

pub struct Report<'a> {
    pub summary: &'a Summary,
    pub records: &'a [VehicleRecord],
    pub output_path: &'a Path,
    pub sample_size: usize,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Processing complete!")?;
        writeln!(f)?;
        writeln!(f, "📊 SUMMARY:")?;
        writeln!(f, "Total vehicles: {}", self.summary.total)?;

        writeln!(f)?;
        writeln!(f, "📈 Category distribution:")?;
        for (category, count) in self.summary.ranked() {
            writeln!(f, "  {}: {}", category, count)?;
        }

        let prices = &self.summary.prices;
        writeln!(f)?;
        writeln!(
            f,
            "💰 Prices: {} listed | {} on request",
            prices.priced, prices.on_request
        )?;
        if let (Some(avg), Some(min), Some(max)) =
            (prices.avg_price, prices.min_price, prices.max_price)
        {
            writeln!(
                f,
                "   Average: {} | Range: {} - {}",
                format_price(avg),
                format_price(min),
                format_price(max)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "💾 File saved to: {}", self.output_path.display())?;

        writeln!(f)?;
        write!(f, "🚗 Sample vehicles:")?;
        for (i, record) in self.records.iter().take(self.sample_size).enumerate() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{}. {} {} {}", i + 1, record.brand, record.model, record.version)?;
            writeln!(f, "   Year: {} | KM: {}", record.year, group_thousands(record.mileage))?;
            writeln!(f, "   Fuel: {} | Color: {}", record.fuel, record.color)?;
            writeln!(
                f,
                "   Price: {}",
                record
                    .price
                    .map(format_price)
                    .unwrap_or_else(|| PRICE_ON_REQUEST_LABEL.to_string())
            )?;
            writeln!(
                f,
                "   Category: {} ({})",
                record.category,
                record.category.body_type()
            )?;
            write!(f, "   URL: {}", record.detail_url)?;
        }
        writeln!(f)
    }
}

/// `51985` -> `"51,985"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `62990.0` -> `"R$ 62,990.00"`.
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let whole = whole.parse::<u64>().map(group_thousands).unwrap_or_else(|_| whole.to_string());
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("R$ {}{}.{}", sign, whole, cents)
}
