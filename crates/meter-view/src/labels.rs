use meter_model::{
    BatteryStatus, BreakerValveState, DeviceKind, GasMeasurementCondition, MeterMode,
    PowerThresholdStatus,
};
use serde::Serialize;

/// Presentation hint attached to a decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticClass {
    Neutral,
    Positive,
    Warning,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateLabel {
    pub label: &'static str,
    pub semantic_class: SemanticClass,
}

impl StateLabel {
    pub const UNKNOWN: StateLabel = StateLabel::neutral("Unknown");

    const fn new(label: &'static str, semantic_class: SemanticClass) -> Self {
        Self {
            label,
            semantic_class,
        }
    }

    const fn neutral(label: &'static str) -> Self {
        Self::new(label, SemanticClass::Neutral)
    }
}

/// A code table value with a human-readable label.
pub trait Decode: Copy {
    fn state_label(self) -> StateLabel;
}

/// Decodes an optional code; an unreported value is "Unknown".
pub fn decode<T: Decode>(code: Option<T>) -> StateLabel {
    code.map(Decode::state_label).unwrap_or(StateLabel::UNKNOWN)
}

impl Decode for BreakerValveState {
    // Closed supplies, Open interrupts. This is the standard's definition.
    fn state_label(self) -> StateLabel {
        match self {
            BreakerValveState::Closed => StateLabel::new("Closed (Active)", SemanticClass::Positive),
            BreakerValveState::Open => {
                StateLabel::new("Open (Interrupted)", SemanticClass::Negative)
            }
            BreakerValveState::Released => StateLabel::new("Released", SemanticClass::Warning),
            BreakerValveState::Reserved => StateLabel::neutral("Reserved"),
            BreakerValveState::Invalid => StateLabel::neutral("Invalid"),
        }
    }
}

impl Decode for MeterMode {
    fn state_label(self) -> StateLabel {
        match self {
            MeterMode::Normal => StateLabel::new("Normal", SemanticClass::Positive),
            MeterMode::Prepayment => StateLabel::neutral("Prepayment"),
            MeterMode::Emergency => StateLabel::new("Emergency", SemanticClass::Warning),
            MeterMode::Reserved => StateLabel::neutral("Reserved"),
            MeterMode::Invalid => StateLabel::neutral("Invalid"),
        }
    }
}

impl Decode for BatteryStatus {
    fn state_label(self) -> StateLabel {
        match self {
            BatteryStatus::Low => StateLabel::new("Low", SemanticClass::Negative),
            BatteryStatus::Medium => StateLabel::new("Medium", SemanticClass::Warning),
            BatteryStatus::High => StateLabel::new("High", SemanticClass::Positive),
            BatteryStatus::Reserved => StateLabel::neutral("Reserved"),
            BatteryStatus::Invalid => StateLabel::neutral("Invalid"),
        }
    }
}

impl Decode for PowerThresholdStatus {
    fn state_label(self) -> StateLabel {
        match self {
            PowerThresholdStatus::Low => StateLabel::new("Low", SemanticClass::Positive),
            PowerThresholdStatus::Medium => StateLabel::new("Medium", SemanticClass::Warning),
            PowerThresholdStatus::High => StateLabel::new("High", SemanticClass::Negative),
            PowerThresholdStatus::Reserved => StateLabel::neutral("Reserved"),
            PowerThresholdStatus::Invalid => StateLabel::neutral("Invalid"),
        }
    }
}

impl Decode for GasMeasurementCondition {
    fn state_label(self) -> StateLabel {
        match self {
            GasMeasurementCondition::Unknown => StateLabel::UNKNOWN,
            GasMeasurementCondition::TemperatureConverted => StateLabel::neutral("Temp. Converted"),
            GasMeasurementCondition::AtBaseCondition => StateLabel::neutral("At Base Condition"),
            GasMeasurementCondition::AtMeasurementCondition => {
                StateLabel::neutral("At Measurement Cond.")
            }
            GasMeasurementCondition::Reserved => StateLabel::neutral("Reserved"),
        }
    }
}

impl Decode for DeviceKind {
    fn state_label(self) -> StateLabel {
        let label = match self {
            DeviceKind::Other => "Other",
            DeviceKind::Oil => "Oil",
            DeviceKind::Electricity => "Electricity",
            DeviceKind::Gas => "Gas",
            DeviceKind::Heat => "Heat",
            DeviceKind::Steam => "Steam",
            DeviceKind::WarmWater => "Warm Water",
            DeviceKind::Water => "Water",
            DeviceKind::HeatCostAllocator => "Heat Cost Allocator",
            DeviceKind::CoolingLoadMeterOutlet => "Cooling Load Meter (Outlet)",
            DeviceKind::CoolingLoadMeterInlet => "Cooling Load Meter (Inlet)",
            DeviceKind::HeatInlet => "Heat (Inlet)",
            DeviceKind::HeatAndCool => "Heat and Cool",
            DeviceKind::Breaker => "Breaker",
            DeviceKind::Valve => "Valve",
            DeviceKind::WasteWater => "Waste Water",
            DeviceKind::Void => "Void",
            DeviceKind::Reserved(_) => "Reserved",
        };
        StateLabel::neutral(label)
    }
}

/// The device status bitset is not decoded bit by bit; any set bit asks for
/// attention.
pub fn device_status(status: Option<u8>) -> StateLabel {
    match status {
        Some(0) => StateLabel::new("Normal", SemanticClass::Positive),
        Some(_) => StateLabel::new("Attention Required", SemanticClass::Negative),
        None => StateLabel::UNKNOWN,
    }
}

pub fn reliability(reliable: Option<bool>) -> StateLabel {
    match reliable {
        Some(true) => StateLabel::new("Valid", SemanticClass::Positive),
        Some(false) => StateLabel::new("Invalid/Old", SemanticClass::Negative),
        None => StateLabel::UNKNOWN,
    }
}

/// Short upper-case form shown for breakers.
pub fn breaker_short_label(state: BreakerValveState) -> &'static str {
    match state {
        BreakerValveState::Closed => "CLOSED",
        BreakerValveState::Open => "OPEN",
        BreakerValveState::Released => "RELEASED",
        BreakerValveState::Reserved => "RESERVED",
        BreakerValveState::Invalid => "INVALID",
    }
}

/// Short upper-case form shown for valves, phrased by effect on the supply.
pub fn valve_short_label(state: BreakerValveState) -> &'static str {
    match state {
        BreakerValveState::Closed => "ACTIVE",
        BreakerValveState::Open => "CUTOFF",
        BreakerValveState::Released => "RELEASED",
        BreakerValveState::Reserved => "RESERVED",
        BreakerValveState::Invalid => "INVALID",
    }
}
