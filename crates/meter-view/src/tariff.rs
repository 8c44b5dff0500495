use meter_model::{MeterEntity, TariffRegister};
use serde::Serialize;

use crate::ViewError;

/// One of the sixteen tariff registers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSlot {
    /// 1-based tariff number.
    pub index: u8,
    pub value: f64,
    pub is_active: bool,
}

/// Consumption (import) tariff registers with the current tariff marked.
pub fn present(entity: &MeterEntity) -> Result<Vec<TariffSlot>, ViewError> {
    let (register, current) = match entity {
        MeterEntity::Electricity(meter) => (
            meter.current_energy_consumption_tariffs.as_ref(),
            meter.current_tariff,
        ),
        MeterEntity::Gas(meter) => (
            meter.current_energy_consumption_tariffs.as_ref(),
            meter.current_tariff,
        ),
        MeterEntity::Heat(_)
        | MeterEntity::Water(_)
        | MeterEntity::HeatCostAllocator(_)
        | MeterEntity::Generic(_)
        | MeterEntity::Breaker(_)
        | MeterEntity::Valve(_)
        | MeterEntity::Unrecognized(_) => (None, None),
    };

    let register = register.ok_or_else(|| ViewError::not_applicable(entity))?;
    Ok(slots(register, current))
}

/// Production (export) tariff registers; only electricity meters have them.
pub fn present_production(entity: &MeterEntity) -> Result<Vec<TariffSlot>, ViewError> {
    match entity {
        MeterEntity::Electricity(meter) => meter
            .current_energy_production_tariffs
            .as_ref()
            .map(|register| slots(register, meter.current_tariff))
            .ok_or_else(|| ViewError::not_applicable(entity)),
        _ => Err(ViewError::not_applicable(entity)),
    }
}

fn slots(register: &TariffRegister, current: Option<u8>) -> Vec<TariffSlot> {
    register
        .values()
        .iter()
        .zip(1u8..)
        .map(|(&value, index)| TariffSlot {
            index,
            value,
            is_active: current == Some(index),
        })
        .collect()
}
