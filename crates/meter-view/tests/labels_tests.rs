use meter_model::{
    BatteryStatus, BreakerValveState, DeviceKind, GasMeasurementCondition, MeterMode,
    PowerThresholdStatus,
};
use meter_view::labels::{breaker_short_label, device_status, reliability, valve_short_label};
use meter_view::{decode, SemanticClass, StateLabel};

#[test]
fn absent_codes_decode_to_unknown() {
    assert_eq!(decode::<BreakerValveState>(None), StateLabel::UNKNOWN);
    assert_eq!(decode::<BatteryStatus>(None).label, "Unknown");
    assert_eq!(
        decode::<MeterMode>(None).semantic_class,
        SemanticClass::Neutral
    );
    assert_eq!(device_status(None), StateLabel::UNKNOWN);
    assert_eq!(reliability(None), StateLabel::UNKNOWN);
}

#[test]
fn breaker_valve_state_keeps_standard_semantics() {
    let closed = decode(Some(BreakerValveState::Closed));
    assert_eq!(closed.label, "Closed (Active)");
    assert_eq!(closed.semantic_class, SemanticClass::Positive);

    let open = decode(Some(BreakerValveState::Open));
    assert_eq!(open.label, "Open (Interrupted)");
    assert_eq!(open.semantic_class, SemanticClass::Negative);

    let released = decode(Some(BreakerValveState::Released));
    assert_eq!(released.label, "Released");
    assert_eq!(released.semantic_class, SemanticClass::Warning);

    assert_eq!(breaker_short_label(BreakerValveState::Closed), "CLOSED");
    assert_eq!(breaker_short_label(BreakerValveState::Open), "OPEN");
    assert_eq!(valve_short_label(BreakerValveState::Closed), "ACTIVE");
    assert_eq!(valve_short_label(BreakerValveState::Open), "CUTOFF");
}

#[test]
fn reserved_and_invalid_codes_are_neutral() {
    let reserved = decode(Some(BreakerValveState::from(7)));
    assert_eq!(reserved.label, "Reserved");
    assert_eq!(reserved.semantic_class, SemanticClass::Neutral);

    let invalid = decode(Some(BatteryStatus::from(255)));
    assert_eq!(invalid.label, "Invalid");
    assert_eq!(invalid.semantic_class, SemanticClass::Neutral);

    assert_eq!(decode(Some(PowerThresholdStatus::from(3))).label, "Reserved");
    assert_eq!(decode(Some(GasMeasurementCondition::from(200))).label, "Reserved");
    assert_eq!(decode(Some(DeviceKind::from(20))).label, "Reserved");
}

#[test]
fn status_tables_carry_semantic_classes() {
    assert_eq!(
        decode(Some(BatteryStatus::Low)).semantic_class,
        SemanticClass::Negative
    );
    assert_eq!(
        decode(Some(BatteryStatus::High)).semantic_class,
        SemanticClass::Positive
    );
    assert_eq!(
        decode(Some(MeterMode::Emergency)).semantic_class,
        SemanticClass::Warning
    );
    assert_eq!(
        decode(Some(PowerThresholdStatus::High)).semantic_class,
        SemanticClass::Negative
    );
    assert_eq!(
        decode(Some(GasMeasurementCondition::TemperatureConverted)).label,
        "Temp. Converted"
    );
    assert_eq!(
        decode(Some(DeviceKind::HeatCostAllocator)).label,
        "Heat Cost Allocator"
    );
    assert_eq!(device_status(Some(0)).semantic_class, SemanticClass::Positive);
    assert_eq!(device_status(Some(4)).label, "Attention Required");
    assert_eq!(reliability(Some(false)).label, "Invalid/Old");
}

#[test]
fn labels_serialize_for_presentation() {
    let json = serde_json::to_value(decode(Some(BreakerValveState::Open))).expect("serialize");
    assert_eq!(json["label"], "Open (Interrupted)");
    assert_eq!(json["semanticClass"], "negative");
}
