//! End-to-end: JSON envelope -> resolver -> thresholds -> color scale.

use statsmap_rs::regions::RegionSetId;
use statsmap_rs::scale::{DEFAULT_PALETTE, NO_DATA_COLOR, ThresholdScale};
use statsmap_rs::{storage, transform};
use tempfile::tempdir;

#[test]
fn ukrainian_dataset_resolves_and_buckets() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("population.json");
    std::fs::write(
        &path,
        r#"{
            "title": "Населення України",
            "valueName": "млн. осіб",
            "data": {
                "Черкаська": 10,
                "Невідомо": 99
            }
        }"#,
    )
    .unwrap();

    let map_data = storage::load_map_data(&path).unwrap();
    let ua = RegionSetId::Ukraine.get();
    let resolved = transform::resolve_map_data(ua, &map_data);

    // The footnote row is dropped silently, no error surfaces.
    assert_eq!(resolved.len(), 1);
    let (code, value) = resolved.iter().next().unwrap();
    assert_eq!(code.as_str(), "CK");
    assert_eq!(*value, 10.0);
}

#[test]
fn full_pipeline_assigns_quantile_colors() {
    let ua = RegionSetId::Ukraine.get();
    let raw = [
        ("Київ", 2.95),
        ("Київська область", 1.78),
        ("Львівська", 2.51),
        ("Одеська обл.", 2.35),
        ("Харківська", 2.65),
        ("Разом", 12.24), // total row, no code
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let resolved = transform::resolve_data_keys(ua, &raw);
    assert_eq!(resolved.len(), 5);

    let values: Vec<f64> = resolved.values().copied().collect();
    let scale = ThresholdScale::quantile(&values, 5);
    assert_eq!(scale.thresholds().len(), 4);
    assert_eq!(scale.colors(), &DEFAULT_PALETTE);

    // Smallest and largest values land in the outer buckets; a region
    // missing from the dataset gets the no-data fill.
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(scale.color_for(Some(min)), DEFAULT_PALETTE[0]);
    assert_eq!(scale.color_for(Some(max)), DEFAULT_PALETTE[4]);
    assert_eq!(scale.color_for(None), NO_DATA_COLOR);
}

#[test]
fn resolved_dataset_survives_json_round_trip() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("resolved.json");

    let de = RegionSetId::Germany.get();
    let raw = [("Bavaria", 13.18), ("Berlin", 3.76), ("Hamburg", 1.85)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let resolved = transform::resolve_data_keys(de, &raw);

    storage::save_json(&resolved, &out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    let round: std::collections::BTreeMap<String, f64> = serde_json::from_str(&text).unwrap();
    assert_eq!(round.len(), 3);
    assert_eq!(round.get("DE-BY"), Some(&13.18));
    assert_eq!(round.get("DE-BE"), Some(&3.76));
    assert_eq!(round.get("DE-HH"), Some(&1.85));
}
