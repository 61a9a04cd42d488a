use std::fs;

use robustcar_listings::{
    AppConfig, Category, JsonSink, LISTINGS, Report, VehicleRecord, pipeline,
};

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        output_path: dir.path().join("robustcar-vehicles.json"),
        ..AppConfig::default()
    }
}

#[test]
fn every_listing_yields_one_record_in_order() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());

    assert_eq!(output.records.len(), LISTINGS.len());
    assert_eq!(output.records.len(), 73);
    for (listing, record) in LISTINGS.iter().zip(&output.records) {
        assert_eq!(record.brand, listing.brand);
        assert_eq!(record.model, listing.model);
        assert_eq!(record.version, listing.version);
        assert_eq!(
            record.detail_url,
            format!("https://robustcar.com.br{}", listing.detail_url)
        );
    }
}

#[test]
fn first_record_matches_its_listing_card() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());
    let expected = VehicleRecord {
        brand: "RENAULT".into(),
        model: "KWID".into(),
        version: "ZEN 2".into(),
        year: 2025,
        mileage: 51985,
        fuel: "FLEX".into(),
        color: "BRANCO".into(),
        price: Some(62990.0),
        detail_url: "https://robustcar.com.br/carros/Renault/Kwid/Zen-2/Renault-Kwid-Zen-2-2025-São-Paulo-Sao-Paulo-7279276.html".into(),
        category: Category::Hatch,
    };
    assert_eq!(output.records[0], expected);
}

#[test]
fn category_distribution_of_captured_stock() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());
    let summary = &output.summary;

    assert_eq!(summary.total, 73);
    assert_eq!(summary.categories.total(), summary.total);
    assert_eq!(
        summary.ranked(),
        vec![
            (Category::Hatch, 28),
            (Category::Suv, 23),
            (Category::Sedan, 17),
            (Category::Pickup, 2),
            (Category::Minivan, 2),
            (Category::Moto, 1),
        ]
    );
    assert_eq!(summary.categories.get(Category::Outros), 0);
}

#[test]
fn neo_listing_is_the_only_motorcycle() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());
    let motos: Vec<_> = output
        .records
        .iter()
        .filter(|r| r.category == Category::Moto)
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(motos, ["NEO"]);
}

#[test]
fn consult_prices_become_null() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());

    for (listing, record) in LISTINGS.iter().zip(&output.records) {
        if listing.price.contains("Consulte") {
            assert_eq!(record.price, None);
        } else {
            assert!(record.price.is_some_and(|p| p > 0.0));
        }
    }
    assert_eq!(output.summary.prices.on_request, 15);
    assert_eq!(output.summary.prices.priced, 58);
}

#[test]
fn fuels_are_canonical() {
    let output = pipeline::run(LISTINGS, &AppConfig::default());
    let allowed = ["FLEX", "GASOLINA", "DIESEL", "HÍBRIDO", "ELÉTRICO"];
    for record in &output.records {
        assert!(allowed.contains(&record.fuel.as_str()), "{}", record.fuel);
    }
    let hybrids = output.records.iter().filter(|r| r.fuel == "HÍBRIDO").count();
    assert_eq!(hybrids, 3);
}

#[test]
fn json_output_is_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let sink = JsonSink::new(&config.output_path);

    sink.write(&pipeline::run(LISTINGS, &config).records).unwrap();
    let first = fs::read(sink.path()).unwrap();
    sink.write(&pipeline::run(LISTINGS, &config).records).unwrap();
    let second = fs::read(sink.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn json_output_keeps_accents_and_nulls() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let sink = JsonSink::new(&config.output_path);
    sink.write(&pipeline::run(LISTINGS, &config).records).unwrap();

    let text = fs::read_to_string(sink.path()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"brand\": \"RENAULT\","));
    assert!(text.contains("São-Paulo"));
    assert!(text.contains("\"fuel\": \"HÍBRIDO\""));
    assert!(text.contains("\"price\": null"));
    assert!(!text.contains("\\u"));

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 73);
    assert_eq!(array[0]["mileage"], 51985);
    assert_eq!(array[0]["year"], 2025);
    assert_eq!(array[2]["category"], "SUV");
}

#[test]
fn custom_base_url_prefixes_detail_paths() {
    let config = AppConfig {
        base_url: "http://mirror.local".into(),
        ..AppConfig::default()
    };
    let output = pipeline::run(LISTINGS, &config);
    for (listing, record) in LISTINGS.iter().zip(&output.records) {
        assert_eq!(record.detail_url, format!("http://mirror.local{}", listing.detail_url));
    }
}

#[test]
fn report_shows_first_three_vehicles() {
    let config = AppConfig::default();
    let output = pipeline::run(LISTINGS, &config);
    let report = Report {
        summary: &output.summary,
        records: &output.records,
        output_path: &config.output_path,
        sample_size: config.sample_size,
    }
    .to_string();

    assert!(report.contains("Total vehicles: 73"));
    assert!(report.contains("  HATCH: 28"));
    assert!(report.contains("1. RENAULT KWID ZEN 2"));
    assert!(report.contains("   Year: 2025 | KM: 51,985"));
    assert!(report.contains("   Price: R$ 62,990.00"));
    assert!(report.contains("3. CAOA CHERY TIGGO 5X PRO 1.5 TURBO FLEX AUT"));
    assert!(report.contains("   Fuel: HÍBRIDO | Color: PRETO"));
    assert!(report.contains("   Price: Consulte"));
    assert!(!report.contains("\n4. "));
}
