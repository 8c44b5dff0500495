use std::path::PathBuf;

use display_app::{detail, load_snapshot};
use meter_registry::{MeterRegistry, RegistryError};
use meter_view::SemanticClass;

fn fixture_registry() -> MeterRegistry {
    MeterRegistry::from_json_str(include_str!("fixtures/snapshot.json")).expect("snapshot parse")
}

#[test]
fn snapshot_file_loads_into_registry() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures/snapshot.json");

    let registry = load_snapshot(&path.to_string_lossy()).expect("load snapshot");
    assert_eq!(registry.len(), 8);
    assert!(load_snapshot("does-not-exist.json").is_err());
}

#[test]
fn electricity_detail_carries_every_view() {
    let registry = fixture_registry();
    let detail = detail::build(&registry, "elec-001", None).expect("detail");

    assert_eq!(detail.name, "Main Electricity");
    assert_eq!(detail.summary.primary_value, "2.40");
    assert_eq!(detail.history.len(), 4);
    assert_eq!(detail.tariffs.as_ref().map(Vec::len), Some(16));
    assert!(detail.production_tariffs.is_some());
    assert_eq!(detail.labels["breakerState"].label, "Closed (Active)");
    assert_eq!(detail.labels["deviceStatus"].semantic_class, SemanticClass::Positive);
    assert_eq!(detail.labels["batteryStatus"].label, "High");
}

#[test]
fn history_limit_keeps_newest_records_in_order() {
    let registry = fixture_registry();
    let detail = detail::build(&registry, "elec-001", Some(2)).expect("detail");

    let storage: Vec<_> = detail
        .history
        .iter()
        .map(|record| record.storage_number)
        .collect();
    assert_eq!(storage, vec![Some(1002), Some(1003)]);
}

#[test]
fn meters_without_tariffs_have_no_tariff_data() {
    let registry = fixture_registry();
    let detail = detail::build(&registry, "vlv-001", Some(5)).expect("detail");

    assert!(detail.tariffs.is_none());
    assert!(detail.history.is_empty());
    assert_eq!(detail.summary.primary_value, "CUTOFF");
    assert_eq!(detail.labels["valveState"].label, "Open (Interrupted)");

    let json = serde_json::to_value(&detail).expect("serialize");
    assert!(json["tariffs"].is_null());
    assert!(json.get("productionTariffs").is_none());
}

#[test]
fn unknown_meter_is_not_found() {
    let registry = fixture_registry();
    assert!(matches!(
        detail::build(&registry, "nope", None),
        Err(RegistryError::NotFound(id)) if id == "nope"
    ));
}

#[test]
fn unrecognized_meter_detail_uses_fallbacks() {
    let registry = fixture_registry();
    let detail = detail::build(&registry, "steam-001", None).expect("detail");

    assert_eq!(detail.summary.primary_value, "-");
    assert_eq!(detail.labels["reliability"].label, "Unknown");
    assert!(detail.tariffs.is_none());
}
