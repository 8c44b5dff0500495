use meter_model::{BreakerValveState, MeterEntity, VariantKind};
use serde::Serialize;

use crate::format::{fixed, grouped, plain};
use crate::labels::{breaker_short_label, valve_short_label, Decode, SemanticClass};

/// Overview card for one meter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub primary_value: String,
    pub unit: String,
    pub secondary_text: String,
    pub semantic_class: SemanticClass,
    pub variant_kind: VariantKind,
    /// Device status reported a nonzero bitset.
    pub alert: bool,
}

impl Summary {
    fn metering(
        entity: &MeterEntity,
        primary_value: String,
        unit: &str,
        secondary_text: String,
    ) -> Self {
        Self {
            primary_value,
            unit: unit.to_string(),
            secondary_text,
            semantic_class: SemanticClass::Neutral,
            variant_kind: entity.variant_kind(),
            alert: entity.common().has_alert(),
        }
    }

    fn switching(entity: &MeterEntity, state: BreakerValveState, short: &str, secondary: &str) -> Self {
        Self {
            primary_value: short.to_string(),
            unit: String::new(),
            secondary_text: secondary.to_string(),
            semantic_class: state.state_label().semantic_class,
            variant_kind: entity.variant_kind(),
            alert: entity.common().has_alert(),
        }
    }

    /// Escape hatch for functional blocks outside the known set. Known
    /// variants never take this path.
    fn fallback(entity: &MeterEntity) -> Self {
        Self {
            primary_value: "-".to_string(),
            unit: String::new(),
            secondary_text: "Generic Meter".to_string(),
            semantic_class: SemanticClass::Neutral,
            variant_kind: entity.variant_kind(),
            alert: entity.common().has_alert(),
        }
    }
}

pub fn summarize(entity: &MeterEntity) -> Summary {
    match entity {
        MeterEntity::Electricity(meter) => Summary::metering(
            entity,
            fixed(meter.current_active_power_consumption, 2),
            "kW",
            format!("{} kWh", grouped(meter.current_energy_consumption)),
        ),
        MeterEntity::Gas(meter) => Summary::metering(
            entity,
            fixed(meter.current_volume_flow, 3),
            "m³/h",
            format!("{} m³", grouped(meter.current_volume_consumption)),
        ),
        MeterEntity::Water(meter) => Summary::metering(
            entity,
            fixed(meter.current_volume_flow, 3),
            "m³/h",
            format!("{} m³", grouped(meter.current_volume_consumption)),
        ),
        MeterEntity::Heat(meter) => Summary::metering(
            entity,
            fixed(meter.current_power, 2),
            "kW",
            format!("Flow: {}°C", plain(meter.temp_flow_water)),
        ),
        MeterEntity::HeatCostAllocator(meter) => {
            let room = match meter.temp_external {
                Some(temp) => format!("Room: {}°C", plain(temp)),
                None => "Room: -".to_string(),
            };
            Summary::metering(entity, plain(meter.current_energy_consumption), "", room)
        }
        MeterEntity::Generic(meter) => Summary::metering(
            entity,
            fixed(meter.current_consumption, 2),
            "",
            "Generic Meter".to_string(),
        ),
        MeterEntity::Breaker(device) => Summary::switching(
            entity,
            device.breaker_state,
            breaker_short_label(device.breaker_state),
            "Circuit Protection",
        ),
        MeterEntity::Valve(device) => Summary::switching(
            entity,
            device.valve_state,
            valve_short_label(device.valve_state),
            "Flow Control",
        ),
        MeterEntity::Unrecognized(_) => Summary::fallback(entity),
    }
}
