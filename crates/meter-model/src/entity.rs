use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes::{
    BatteryStatus, BreakerValveState, DeviceKind, GasMeasurementCondition, MeterMode,
    PowerThresholdStatus,
};
use crate::timestamp::Timestamp;

/// Number of tariff registers carried by electricity and gas meters.
pub const TARIFF_SLOTS: usize = 16;

/// Tariff registers 1 to 16. Slot 0 holds "Tariff 1".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffRegister([f64; TARIFF_SLOTS]);

impl TariffRegister {
    pub fn new(values: [f64; TARIFF_SLOTS]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; TARIFF_SLOTS] {
        &self.0
    }

    /// Looks up a register by its 1-based tariff number.
    pub fn get(&self, tariff: u8) -> Option<f64> {
        let slot = usize::from(tariff).checked_sub(1)?;
        self.0.get(slot).copied()
    }
}

/// Data points shared by every functional block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonFields {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "MeteringDeviceType")]
    pub device_kind: DeviceKind,
    pub rx_sequence_counter: Option<u8>,
    pub rx_reception_time: Option<Timestamp>,
    pub manufacturer: Option<u16>,
    pub identification_number: Option<u32>,
    pub version_number: Option<u8>,
    pub fabrication_number: Option<u32>,
    pub access_number: Option<u8>,
    /// Opaque status bitset; zero means nominal.
    pub device_status: Option<u8>,
    /// Seconds.
    pub operating_time: Option<u64>,
    /// Seconds.
    pub on_time: Option<u64>,
    pub current_date: Option<Timestamp>,
    pub error_date: Option<Timestamp>,
    pub metering_raw_data: Option<Vec<u8>>,
    pub user_text: Option<String>,
    pub meter_replacement: Option<bool>,
    pub meter_replacement_counter: Option<u8>,
    pub currency: Option<String>,
    pub accumulated_cost: Option<f64>,
    pub current_credit: Option<f64>,
    pub mode: Option<MeterMode>,
    pub battery_status: Option<BatteryStatus>,
}

impl CommonFields {
    /// A reported, nonzero device status.
    pub fn has_alert(&self) -> bool {
        matches!(self.device_status, Some(status) if status != 0)
    }
}

/// M_ELECM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElectricityMeter {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Import, kWh.
    pub current_energy_consumption: f64,
    /// Export, kWh.
    pub current_energy_production: Option<f64>,
    pub current_reactive_energy: Option<f64>,
    pub breaker_state: Option<BreakerValveState>,
    pub reliability_of_metering_data: bool,
    pub current_energy_consumption_tariffs: Option<TariffRegister>,
    pub current_energy_production_tariffs: Option<TariffRegister>,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_energy_consumption_tariff1: Option<Vec<f64>>,
    pub history_energy_production_tariff1: Option<Vec<f64>>,
    /// kW.
    pub current_active_power_consumption: f64,
    pub current_active_power_production: Option<f64>,
    pub current_tariff: Option<u8>,
    pub power_threshold_status: Option<PowerThresholdStatus>,
    pub power_threshold_value: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_GASM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GasMeter {
    #[serde(flatten)]
    pub common: CommonFields,
    /// m³.
    pub current_volume_consumption: f64,
    /// m³/h.
    pub current_volume_flow: f64,
    pub temp_flow_gas: Option<f64>,
    pub measurement_condition: Option<GasMeasurementCondition>,
    pub valve_state: Option<BreakerValveState>,
    pub reliability_of_metering_data: bool,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_volume_consumption: Option<Vec<f64>>,
    pub history_volume_max_flow: Option<Vec<f64>>,
    pub history_volume_min_flow: Option<Vec<f64>>,
    pub current_energy_consumption_tariffs: Option<TariffRegister>,
    pub history_energy_consumption_tariffs: Option<Vec<f64>>,
    pub current_tariff: Option<u8>,
    pub error_consumption: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_HEATM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeatMeter {
    #[serde(flatten)]
    pub common: CommonFields,
    /// kWh.
    pub current_energy_consumption: f64,
    /// °C.
    pub temp_flow_water: f64,
    pub temp_return_water: f64,
    /// K.
    pub temp_diff_water: f64,
    pub reliability_of_metering_data: bool,
    /// kW.
    pub current_power: f64,
    /// m³/h.
    pub current_volume_flow: f64,
    #[serde(rename = "CurrentEnergyConsumption_T1")]
    pub current_energy_consumption_t1: Option<f64>,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_energy_consumption: Option<Vec<f64>>,
    #[serde(rename = "HistoryEnergyConsumption_T1")]
    pub history_energy_consumption_t1: Option<Vec<f64>>,
    pub history_volume_max_flow: Option<Vec<f64>>,
    pub history_volume_min_flow: Option<Vec<f64>>,
    pub history_max_power: Option<Vec<f64>>,
    pub history_min_power: Option<Vec<f64>>,
    pub max_power_date: Option<Timestamp>,
    pub max_power: Option<f64>,
    pub min_power_date: Option<Timestamp>,
    pub min_power: Option<f64>,
    pub error_consumption: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_WATERM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaterMeter {
    #[serde(flatten)]
    pub common: CommonFields,
    pub current_volume_consumption: f64,
    pub current_volume_flow: f64,
    pub temp_flow_water: Option<f64>,
    pub reliability_of_metering_data: bool,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_volume_consumption: Option<Vec<f64>>,
    pub history_volume_max_flow: Option<Vec<f64>>,
    pub history_volume_min_flow: Option<Vec<f64>>,
    pub error_consumption: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_HCA
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeatCostAllocator {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Accumulated allocator units.
    pub current_energy_consumption: f64,
    /// Radiator surface temperature.
    pub temp_flow_water: Option<f64>,
    /// Room temperature.
    pub temp_external: Option<f64>,
    pub reliability_of_metering_data: bool,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_energy_consumption: Option<Vec<f64>>,
    pub error_consumption: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_GENERICM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericMeter {
    #[serde(flatten)]
    pub common: CommonFields,
    pub current_consumption: f64,
    pub reliability_of_metering_data: bool,
    pub history_storage_numbers: Option<Vec<u32>>,
    pub history_date: Option<Vec<Timestamp>>,
    pub history_consumption: Option<Vec<f64>>,
    pub error_consumption: Option<f64>,
    pub averaging_duration: Option<u64>,
}

/// M_BREAKERM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BreakerDevice {
    #[serde(flatten)]
    pub common: CommonFields,
    pub breaker_state: BreakerValveState,
    pub reliability_of_metering_data: bool,
}

/// M_VALVEM
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValveDevice {
    #[serde(flatten)]
    pub common: CommonFields,
    pub valve_state: BreakerValveState,
    pub reliability_of_metering_data: bool,
}

/// A record whose functional block tag is not one of the known eight. Only
/// the common data points are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnrecognizedMeter {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(flatten)]
    pub common: CommonFields,
}

/// One functional block snapshot, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum MeterEntity {
    #[serde(rename = "M_ELECM")]
    Electricity(ElectricityMeter),
    #[serde(rename = "M_GASM")]
    Gas(GasMeter),
    #[serde(rename = "M_HEATM")]
    Heat(HeatMeter),
    #[serde(rename = "M_WATERM")]
    Water(WaterMeter),
    #[serde(rename = "M_HCA")]
    HeatCostAllocator(HeatCostAllocator),
    #[serde(rename = "M_GENERICM")]
    Generic(GenericMeter),
    #[serde(rename = "M_BREAKERM")]
    Breaker(BreakerDevice),
    #[serde(rename = "M_VALVEM")]
    Valve(ValveDevice),
    /// Never produced by the tagged decoder; built explicitly by snapshot
    /// loaders for unknown tags.
    #[serde(skip)]
    Unrecognized(UnrecognizedMeter),
}

impl MeterEntity {
    pub fn common(&self) -> &CommonFields {
        match self {
            MeterEntity::Electricity(meter) => &meter.common,
            MeterEntity::Gas(meter) => &meter.common,
            MeterEntity::Heat(meter) => &meter.common,
            MeterEntity::Water(meter) => &meter.common,
            MeterEntity::HeatCostAllocator(meter) => &meter.common,
            MeterEntity::Generic(meter) => &meter.common,
            MeterEntity::Breaker(device) => &device.common,
            MeterEntity::Valve(device) => &device.common,
            MeterEntity::Unrecognized(record) => &record.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn variant_kind(&self) -> VariantKind {
        match self {
            MeterEntity::Electricity(_) => VariantKind::Electricity,
            MeterEntity::Gas(_) => VariantKind::Gas,
            MeterEntity::Heat(_) => VariantKind::Heat,
            MeterEntity::Water(_) => VariantKind::Water,
            MeterEntity::HeatCostAllocator(_) => VariantKind::HeatCostAllocator,
            MeterEntity::Generic(_) => VariantKind::Generic,
            MeterEntity::Breaker(_) => VariantKind::Breaker,
            MeterEntity::Valve(_) => VariantKind::Valve,
            MeterEntity::Unrecognized(_) => VariantKind::Unrecognized,
        }
    }

    /// Reliability flag as reported; unrecognized blocks carry none.
    pub fn reliability(&self) -> Option<bool> {
        match self {
            MeterEntity::Electricity(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::Gas(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::Heat(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::Water(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::HeatCostAllocator(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::Generic(meter) => Some(meter.reliability_of_metering_data),
            MeterEntity::Breaker(device) => Some(device.reliability_of_metering_data),
            MeterEntity::Valve(device) => Some(device.reliability_of_metering_data),
            MeterEntity::Unrecognized(_) => None,
        }
    }
}

/// Functional block discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariantKind {
    Electricity,
    Gas,
    Heat,
    Water,
    HeatCostAllocator,
    Generic,
    Breaker,
    Valve,
    Unrecognized,
}

impl VariantKind {
    /// Resolves one of the eight known tags. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "M_ELECM" => Some(VariantKind::Electricity),
            "M_GASM" => Some(VariantKind::Gas),
            "M_HEATM" => Some(VariantKind::Heat),
            "M_WATERM" => Some(VariantKind::Water),
            "M_HCA" => Some(VariantKind::HeatCostAllocator),
            "M_GENERICM" => Some(VariantKind::Generic),
            "M_BREAKERM" => Some(VariantKind::Breaker),
            "M_VALVEM" => Some(VariantKind::Valve),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            VariantKind::Electricity => "M_ELECM",
            VariantKind::Gas => "M_GASM",
            VariantKind::Heat => "M_HEATM",
            VariantKind::Water => "M_WATERM",
            VariantKind::HeatCostAllocator => "M_HCA",
            VariantKind::Generic => "M_GENERICM",
            VariantKind::Breaker => "M_BREAKERM",
            VariantKind::Valve => "M_VALVEM",
            VariantKind::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
