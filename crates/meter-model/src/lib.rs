//! H1 functional-block data model: the enumerated code tables and the
//! tagged union of meter entities built on them.

mod codes;
mod entity;
mod timestamp;

pub use codes::{
    BatteryStatus, BreakerValveState, DeviceKind, GasMeasurementCondition, MeterMode,
    PowerThresholdStatus,
};
pub use entity::{
    BreakerDevice, CommonFields, ElectricityMeter, GasMeter, GenericMeter, HeatCostAllocator,
    HeatMeter, MeterEntity, TariffRegister, UnrecognizedMeter, ValveDevice, VariantKind,
    WaterMeter, TARIFF_SLOTS,
};
pub use timestamp::Timestamp;
