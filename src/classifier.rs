use crate::model::Category;

/// Keyword lists checked in order; the first category with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Moto, &["NEO"]),
    (Category::Pickup, &["TORO", "STRADA"]),
    (Category::Minivan, &["MERIVA", "IDEA"]),
    (
        Category::Suv,
        &[
            "CRETA", "COMPASS", "RENEGADE", "TRACKER", "ECOSPORT", "DUSTER", "HR-V", "TUCSON",
            "SPORTAGE", "RAV4", "TIGGO", "KORANDO", "PAJERO", "T-CROSS", "T CROSS", "AIRCROSS",
            "STONIC", "GRAND LIVINA", "FREEMONT",
        ],
    ),
    (
        Category::Sedan,
        &[
            "CIVIC", "COROLLA", "CITY", "CRUZE", "HB20S", "SENTRA", "LOGAN", "VOYAGE", "FOCUS",
            "PRIUS", "ARRIZO",
        ],
    ),
    (
        Category::Hatch,
        &[
            "ONIX", "HB20", "FIESTA", "KA", "CELTA", "UNO", "PALIO", "FOX", "MOBI", "KWID",
            "ETIOS", "YARIS", "C3", "207", "PUNTO", "SOUL",
        ],
    ),
];

pub fn classify(model: &str) -> Category {
    let model = model.to_uppercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords.iter() {
            if model.contains(keyword) {
                return *category;
            }
        }
    }

    Category::Outros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neo_is_a_motorcycle() {
        assert_eq!(classify("NEO"), Category::Moto);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("compass"), Category::Suv);
        assert_eq!(classify("Grand Livina"), Category::Suv);
    }

    #[test]
    fn sedan_variant_wins_over_hatch_prefix() {
        assert_eq!(classify("HB20S"), Category::Sedan);
        assert_eq!(classify("HB20"), Category::Hatch);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        // TORO (pickup) and KA (hatch) both occur here.
        assert_eq!(classify("TORO KA"), Category::Pickup);
        // IDEA (minivan) precedes the SUV list.
        assert_eq!(classify("IDEA TRACKER"), Category::Minivan);
        // NEO outranks every other list.
        assert_eq!(classify("NEO CIVIC"), Category::Moto);
    }

    #[test]
    fn keywords_match_as_substrings() {
        assert_eq!(classify("SKATE"), Category::Hatch);
        assert_eq!(classify("T CROSS 200"), Category::Suv);
    }

    #[test]
    fn unknown_models_fall_back_to_outros() {
        assert_eq!(classify("GOLF"), Category::Outros);
        assert_eq!(classify(""), Category::Outros);
    }

    #[test]
    fn classification_is_deterministic() {
        for model in ["RAV4", "PRIUS", "207", "MERIVA"] {
            assert_eq!(classify(model), classify(model));
        }
    }
}
