// Field normalizers: price, mileage, fuel and year text coming from listing cards.
use tracing::warn;

/// Text shown instead of an amount when the dealer asks to be contacted.
pub const PRICE_ON_REQUEST_MARKER: &str = "Consulte";

pub const FUEL_ELECTRIC: &str = "ELÉTRICO";
pub const FUEL_HYBRID: &str = "HÍBRIDO";

/// Parses `"R$ 62.990,00"` into `62990.0`.
///
/// Returns `None` both for the on-request marker and for text that is not a number; the two
/// cases are not told apart.
pub fn normalize_price(text: &str) -> Option<f64> {
    if text.contains(PRICE_ON_REQUEST_MARKER) {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parses `"51.985"` into `51985`. Anything unreadable counts as zero.
pub fn normalize_mileage(text: &str) -> u64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '.' | ',') && !c.is_whitespace())
        .collect();

    cleaned.parse::<u64>().unwrap_or(0)
}

/// Uppercases the fuel label and folds the spellings of electric and hybrid onto their
/// accented forms.
pub fn normalize_fuel(text: &str) -> String {
    let fuel = text.to_uppercase();

    if fuel.contains(FUEL_ELECTRIC) || fuel.contains("ELETRICO") {
        FUEL_ELECTRIC.to_string()
    } else if fuel.contains(FUEL_HYBRID) || fuel.contains("HIBRIDO") {
        FUEL_HYBRID.to_string()
    } else {
        fuel
    }
}

pub fn normalize_year(text: &str) -> u16 {
    match text.trim().parse::<u16>() {
        Ok(year) => year,
        Err(e) => {
            warn!("Unreadable year {:?}: {}", text, e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_with_thousands_and_cents() {
        assert_eq!(normalize_price("R$ 62.990,00"), Some(62990.0));
        assert_eq!(normalize_price("R$ 1.234.567,89"), Some(1234567.89));
        assert_eq!(normalize_price("R$ 23.990,50"), Some(23990.5));
    }

    #[test]
    fn price_on_request_is_absent() {
        assert_eq!(normalize_price("R$ Consulte"), None);
        assert_eq!(normalize_price("Consulte"), None);
    }

    #[test]
    fn unreadable_price_is_absent() {
        assert_eq!(normalize_price("R$ a combinar"), None);
        assert_eq!(normalize_price(""), None);
        assert_eq!(normalize_price("R$ inf"), None);
    }

    #[test]
    fn mileage_strips_separators() {
        assert_eq!(normalize_mileage("51.985"), 51985);
        assert_eq!(normalize_mileage("1"), 1);
        assert_eq!(normalize_mileage(" 120,000 "), 120000);
    }

    #[test]
    fn unreadable_mileage_is_zero() {
        assert_eq!(normalize_mileage("abc"), 0);
        assert_eq!(normalize_mileage(""), 0);
        assert_eq!(normalize_mileage("-5"), 0);
    }

    #[test]
    fn hybrid_spellings_share_one_label() {
        assert_eq!(normalize_fuel("HÍBRIDO"), FUEL_HYBRID);
        assert_eq!(normalize_fuel("HIBRIDO"), FUEL_HYBRID);
        assert_eq!(normalize_fuel("híbrido"), FUEL_HYBRID);
        assert_eq!(normalize_fuel("Flex / Hibrido"), FUEL_HYBRID);
    }

    #[test]
    fn electric_spellings_share_one_label() {
        assert_eq!(normalize_fuel("ELÉTRICO"), FUEL_ELECTRIC);
        assert_eq!(normalize_fuel("eletrico"), FUEL_ELECTRIC);
    }

    #[test]
    fn electric_is_checked_before_hybrid() {
        assert_eq!(normalize_fuel("HÍBRIDO ELÉTRICO"), FUEL_ELECTRIC);
    }

    #[test]
    fn other_fuels_are_uppercased() {
        assert_eq!(normalize_fuel("flex"), "FLEX");
        assert_eq!(normalize_fuel("Diesel"), "DIESEL");
    }

    #[test]
    fn year_parses_or_falls_back_to_zero() {
        assert_eq!(normalize_year("2025"), 2025);
        assert_eq!(normalize_year(" 2008 "), 2008);
        assert_eq!(normalize_year("n/a"), 0);
    }
}
