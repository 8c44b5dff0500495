use meter_model::{
    BatteryStatus, BreakerValveState, DeviceKind, GasMeasurementCondition, MeterEntity,
    MeterMode, PowerThresholdStatus, TariffRegister, Timestamp, VariantKind,
};

#[test]
fn code_tables_never_fail_to_decode() {
    assert_eq!(DeviceKind::from(2), DeviceKind::Electricity);
    assert_eq!(DeviceKind::from(33), DeviceKind::Valve);
    assert_eq!(DeviceKind::from(9), DeviceKind::Reserved(9));
    assert_eq!(u8::from(DeviceKind::Reserved(77)), 77);
    assert_eq!(DeviceKind::from(255), DeviceKind::Void);

    assert_eq!(BreakerValveState::from(0), BreakerValveState::Closed);
    assert_eq!(BreakerValveState::from(1), BreakerValveState::Open);
    assert_eq!(BreakerValveState::from(42), BreakerValveState::Reserved);
    assert_eq!(BreakerValveState::from(255), BreakerValveState::Invalid);

    assert_eq!(MeterMode::from(2), MeterMode::Emergency);
    assert_eq!(MeterMode::from(3), MeterMode::Reserved);
    assert_eq!(BatteryStatus::from(255), BatteryStatus::Invalid);
    assert_eq!(PowerThresholdStatus::from(1), PowerThresholdStatus::Medium);
    assert_eq!(GasMeasurementCondition::from(9), GasMeasurementCondition::Reserved);
    assert_eq!(GasMeasurementCondition::from(0), GasMeasurementCondition::Unknown);
}

#[test]
fn electricity_meter_decodes_from_h1_names() {
    let data = r#"{
        "id": "elec-001",
        "name": "Main Electricity",
        "type": "M_ELECM",
        "MeteringDeviceType": 2,
        "DeviceStatus": 0,
        "CurrentDate": "2024-05-14T10:15:00Z",
        "Mode": 1,
        "CurrentEnergyConsumption": 14502.5,
        "CurrentActivePowerConsumption": 2.4,
        "ReliabilityOfMeteringData": true,
        "BreakerState": 1,
        "CurrentTariff": 2,
        "CurrentEnergyConsumptionTariffs": [1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        "HistoryDate": ["2024-05-10", "2024-05-11"]
    }"#;

    let entity: MeterEntity = serde_json::from_str(data).expect("entity parse");
    assert_eq!(entity.id(), "elec-001");
    assert_eq!(entity.name(), "Main Electricity");
    assert_eq!(entity.variant_kind(), VariantKind::Electricity);
    assert_eq!(entity.reliability(), Some(true));

    let MeterEntity::Electricity(meter) = entity else {
        panic!("expected electricity meter");
    };
    assert_eq!(meter.common.device_kind, DeviceKind::Electricity);
    assert_eq!(meter.common.mode, Some(MeterMode::Prepayment));
    assert_eq!(meter.common.battery_status, None);
    assert!(!meter.common.has_alert());
    assert_eq!(meter.breaker_state, Some(BreakerValveState::Open));
    assert_eq!(meter.current_active_power_consumption, 2.4);
    assert_eq!(meter.current_energy_production, None);

    let tariffs = meter.current_energy_consumption_tariffs.expect("tariffs");
    assert_eq!(tariffs.get(1), Some(1.0));
    assert_eq!(tariffs.get(2), Some(2.0));
    assert_eq!(tariffs.get(0), None);
    assert_eq!(tariffs.get(17), None);

    let dates = meter.history_date.expect("history dates");
    assert_eq!(dates.len(), 2);
    assert!(dates[0] < dates[1]);
}

#[test]
fn tariff_register_requires_sixteen_slots() {
    let short: Result<TariffRegister, _> = serde_json::from_str("[1, 2, 3]");
    assert!(short.is_err());

    let long: Result<TariffRegister, _> = serde_json::from_str(
        "[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]",
    );
    assert!(long.is_err());

    let exact: TariffRegister = serde_json::from_str(
        "[5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7]",
    )
    .expect("register parse");
    assert_eq!(exact.get(16), Some(7.0));
}

#[test]
fn nonzero_device_status_is_an_alert() {
    let data = r#"{
        "id": "gas-001",
        "name": "Gas Supply",
        "type": "M_GASM",
        "MeteringDeviceType": 3,
        "DeviceStatus": 4,
        "CurrentVolumeConsumption": 5430.12,
        "CurrentVolumeFlow": 0.05,
        "ReliabilityOfMeteringData": false
    }"#;

    let entity: MeterEntity = serde_json::from_str(data).expect("entity parse");
    assert!(entity.common().has_alert());
    assert_eq!(entity.reliability(), Some(false));
}

#[test]
fn breaker_requires_its_state() {
    let data = r#"{
        "id": "brk-001",
        "name": "Main Circuit Breaker",
        "type": "M_BREAKERM",
        "MeteringDeviceType": 32,
        "ReliabilityOfMeteringData": true
    }"#;

    let result: Result<MeterEntity, _> = serde_json::from_str(data);
    assert!(result.is_err());
}

#[test]
fn timestamps_accept_dates_and_date_times() {
    let date = Timestamp::parse("2024-05-10").expect("date");
    let midnight = Timestamp::parse("2024-05-10T00:00:00Z").expect("rfc3339");
    let naive = Timestamp::parse("2024-05-10T00:00:00.000").expect("naive");
    assert_eq!(date, midnight);
    assert_eq!(date, naive);
    assert_eq!(date.to_string(), "2024-05-10T00:00:00Z");
    assert!(Timestamp::parse("yesterday").is_none());
}

#[test]
fn variant_tags_resolve_both_ways() {
    for kind in [
        VariantKind::Electricity,
        VariantKind::Gas,
        VariantKind::Heat,
        VariantKind::Water,
        VariantKind::HeatCostAllocator,
        VariantKind::Generic,
        VariantKind::Breaker,
        VariantKind::Valve,
    ] {
        assert_eq!(VariantKind::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(VariantKind::from_tag("M_STEAMM"), None);
}
