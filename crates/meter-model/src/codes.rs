use serde::{Deserialize, Serialize};

/// Metering device type (DPT_MeteringDeviceType). Codes outside the assigned
/// ranges decode to `Reserved` and keep their raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum DeviceKind {
    Other,
    Oil,
    Electricity,
    Gas,
    Heat,
    Steam,
    WarmWater,
    Water,
    HeatCostAllocator,
    CoolingLoadMeterOutlet,
    CoolingLoadMeterInlet,
    HeatInlet,
    HeatAndCool,
    Breaker,
    Valve,
    WasteWater,
    Void,
    Reserved(u8),
}

impl Default for DeviceKind {
    fn default() -> Self {
        DeviceKind::Other
    }
}

impl From<u8> for DeviceKind {
    fn from(code: u8) -> Self {
        match code {
            0 => DeviceKind::Other,
            1 => DeviceKind::Oil,
            2 => DeviceKind::Electricity,
            3 => DeviceKind::Gas,
            4 => DeviceKind::Heat,
            5 => DeviceKind::Steam,
            6 => DeviceKind::WarmWater,
            7 => DeviceKind::Water,
            8 => DeviceKind::HeatCostAllocator,
            10 => DeviceKind::CoolingLoadMeterOutlet,
            11 => DeviceKind::CoolingLoadMeterInlet,
            12 => DeviceKind::HeatInlet,
            13 => DeviceKind::HeatAndCool,
            32 => DeviceKind::Breaker,
            33 => DeviceKind::Valve,
            40 => DeviceKind::WasteWater,
            255 => DeviceKind::Void,
            other => DeviceKind::Reserved(other),
        }
    }
}

impl From<DeviceKind> for u8 {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Other => 0,
            DeviceKind::Oil => 1,
            DeviceKind::Electricity => 2,
            DeviceKind::Gas => 3,
            DeviceKind::Heat => 4,
            DeviceKind::Steam => 5,
            DeviceKind::WarmWater => 6,
            DeviceKind::Water => 7,
            DeviceKind::HeatCostAllocator => 8,
            DeviceKind::CoolingLoadMeterOutlet => 10,
            DeviceKind::CoolingLoadMeterInlet => 11,
            DeviceKind::HeatInlet => 12,
            DeviceKind::HeatAndCool => 13,
            DeviceKind::Breaker => 32,
            DeviceKind::Valve => 33,
            DeviceKind::WasteWater => 40,
            DeviceKind::Void => 255,
            DeviceKind::Reserved(code) => code,
        }
    }
}

/// Breaker and valve state (DPT_Meter_BreakerValve_State).
///
/// The standard defines `Closed` as "supply active" and `Open` as "supply
/// intentionally interrupted", for valves as well as breakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BreakerValveState {
    Closed,
    Open,
    Released,
    Reserved,
    Invalid,
}

impl From<u8> for BreakerValveState {
    fn from(code: u8) -> Self {
        match code {
            0 => BreakerValveState::Closed,
            1 => BreakerValveState::Open,
            2 => BreakerValveState::Released,
            255 => BreakerValveState::Invalid,
            _ => BreakerValveState::Reserved,
        }
    }
}

impl From<BreakerValveState> for u8 {
    fn from(state: BreakerValveState) -> Self {
        match state {
            BreakerValveState::Closed => 0,
            BreakerValveState::Open => 1,
            BreakerValveState::Released => 2,
            BreakerValveState::Reserved => 3,
            BreakerValveState::Invalid => 255,
        }
    }
}

/// Meter operating mode (DPT_Meter_Mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MeterMode {
    Normal,
    Prepayment,
    Emergency,
    Reserved,
    Invalid,
}

impl From<u8> for MeterMode {
    fn from(code: u8) -> Self {
        match code {
            0 => MeterMode::Normal,
            1 => MeterMode::Prepayment,
            2 => MeterMode::Emergency,
            255 => MeterMode::Invalid,
            _ => MeterMode::Reserved,
        }
    }
}

impl From<MeterMode> for u8 {
    fn from(mode: MeterMode) -> Self {
        match mode {
            MeterMode::Normal => 0,
            MeterMode::Prepayment => 1,
            MeterMode::Emergency => 2,
            MeterMode::Reserved => 3,
            MeterMode::Invalid => 255,
        }
    }
}

/// DPT_Battery_Status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BatteryStatus {
    Low,
    Medium,
    High,
    Reserved,
    Invalid,
}

impl From<u8> for BatteryStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => BatteryStatus::Low,
            1 => BatteryStatus::Medium,
            2 => BatteryStatus::High,
            255 => BatteryStatus::Invalid,
            _ => BatteryStatus::Reserved,
        }
    }
}

impl From<BatteryStatus> for u8 {
    fn from(status: BatteryStatus) -> Self {
        match status {
            BatteryStatus::Low => 0,
            BatteryStatus::Medium => 1,
            BatteryStatus::High => 2,
            BatteryStatus::Reserved => 3,
            BatteryStatus::Invalid => 255,
        }
    }
}

/// DPT_Power_Threshold_Status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PowerThresholdStatus {
    Low,
    Medium,
    High,
    Reserved,
    Invalid,
}

impl From<u8> for PowerThresholdStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => PowerThresholdStatus::Low,
            1 => PowerThresholdStatus::Medium,
            2 => PowerThresholdStatus::High,
            255 => PowerThresholdStatus::Invalid,
            _ => PowerThresholdStatus::Reserved,
        }
    }
}

impl From<PowerThresholdStatus> for u8 {
    fn from(status: PowerThresholdStatus) -> Self {
        match status {
            PowerThresholdStatus::Low => 0,
            PowerThresholdStatus::Medium => 1,
            PowerThresholdStatus::High => 2,
            PowerThresholdStatus::Reserved => 3,
            PowerThresholdStatus::Invalid => 255,
        }
    }
}

/// DPT_Gas_Measurement_Condition. Everything from code 4 upwards is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum GasMeasurementCondition {
    Unknown,
    TemperatureConverted,
    AtBaseCondition,
    AtMeasurementCondition,
    Reserved,
}

impl From<u8> for GasMeasurementCondition {
    fn from(code: u8) -> Self {
        match code {
            0 => GasMeasurementCondition::Unknown,
            1 => GasMeasurementCondition::TemperatureConverted,
            2 => GasMeasurementCondition::AtBaseCondition,
            3 => GasMeasurementCondition::AtMeasurementCondition,
            _ => GasMeasurementCondition::Reserved,
        }
    }
}

impl From<GasMeasurementCondition> for u8 {
    fn from(condition: GasMeasurementCondition) -> Self {
        match condition {
            GasMeasurementCondition::Unknown => 0,
            GasMeasurementCondition::TemperatureConverted => 1,
            GasMeasurementCondition::AtBaseCondition => 2,
            GasMeasurementCondition::AtMeasurementCondition => 3,
            GasMeasurementCondition::Reserved => 4,
        }
    }
}
