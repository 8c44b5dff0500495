use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use meter_model::MeterEntity;
use meter_registry::{MeterRegistry, RegistryError};
use meter_view::labels::{device_status, reliability};
use meter_view::{
    build_history, decode, present_production, present_tariffs, summarize, HistoryRecord,
    StateLabel, Summary, TariffSlot,
};
use serde::Serialize;
use tracing::debug;

/// Everything shown for one selected meter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDetail {
    pub id: String,
    pub name: String,
    pub summary: Summary,
    pub labels: BTreeMap<&'static str, StateLabel>,
    pub history: Vec<HistoryRecord>,
    /// `None` when the meter has no tariff register.
    pub tariffs: Option<Vec<TariffSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_tariffs: Option<Vec<TariffSlot>>,
}

pub fn load_snapshot(path: &str) -> Result<MeterRegistry> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read snapshot file {path}"))?;
    MeterRegistry::from_json_str(&content).with_context(|| format!("parse snapshot {path}"))
}

/// Assembles the detail of `id`. History keeps the `history_limit` newest
/// records, still oldest first.
pub fn build(
    registry: &MeterRegistry,
    id: &str,
    history_limit: Option<usize>,
) -> Result<MeterDetail, RegistryError> {
    let entity = registry.get(id)?;

    let series = build_history(entity);
    let skip = history_limit
        .map(|limit| series.len().saturating_sub(limit))
        .unwrap_or(0);
    let history = series.iter().skip(skip).collect();

    let tariffs = match present_tariffs(entity) {
        Ok(slots) => Some(slots),
        Err(err) => {
            debug!(id, error = %err, "no tariff data");
            None
        }
    };

    Ok(MeterDetail {
        id: entity.id().to_string(),
        name: entity.name().to_string(),
        summary: summarize(entity),
        labels: labels(entity),
        history,
        tariffs,
        production_tariffs: present_production(entity).ok(),
    })
}

fn labels(entity: &MeterEntity) -> BTreeMap<&'static str, StateLabel> {
    let common = entity.common();
    let mut labels = BTreeMap::from([
        ("deviceKind", decode(Some(common.device_kind))),
        ("deviceStatus", device_status(common.device_status)),
        ("reliability", reliability(entity.reliability())),
        ("batteryStatus", decode(common.battery_status)),
        ("mode", decode(common.mode)),
    ]);

    match entity {
        MeterEntity::Electricity(meter) => {
            labels.insert("breakerState", decode(meter.breaker_state));
            labels.insert("powerThresholdStatus", decode(meter.power_threshold_status));
        }
        MeterEntity::Gas(meter) => {
            labels.insert("valveState", decode(meter.valve_state));
            labels.insert("measurementCondition", decode(meter.measurement_condition));
        }
        MeterEntity::Breaker(device) => {
            labels.insert("breakerState", decode(Some(device.breaker_state)));
        }
        MeterEntity::Valve(device) => {
            labels.insert("valveState", decode(Some(device.valve_state)));
        }
        MeterEntity::Heat(_)
        | MeterEntity::Water(_)
        | MeterEntity::HeatCostAllocator(_)
        | MeterEntity::Generic(_)
        | MeterEntity::Unrecognized(_) => {}
    }

    labels
}
