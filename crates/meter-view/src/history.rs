use std::collections::BTreeMap;

use meter_model::{MeterEntity, Timestamp};
use serde::Serialize;
use tracing::debug;

/// Metric keys used in history records.
pub mod metric {
    pub const ENERGY: &str = "energy";
    pub const ENERGY_T1: &str = "energy_t1";
    pub const PRODUCTION: &str = "production";
    pub const VOLUME: &str = "volume";
    pub const CONSUMPTION: &str = "consumption";
    pub const MAX_FLOW: &str = "max_flow";
    pub const MIN_FLOW: &str = "min_flow";
    pub const MAX_POWER: &str = "max_power";
    pub const MIN_POWER: &str = "min_power";
}

/// One recorded interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_number: Option<u32>,
    pub metrics: BTreeMap<&'static str, f64>,
}

type Column<'a> = (&'static str, &'a [f64]);

/// The history of one entity in ascending chronological order.
///
/// Records are composed on demand from the entity's parallel arrays;
/// [`HistorySeries::iter`] can be called any number of times.
#[derive(Debug, Clone)]
pub struct HistorySeries<'a> {
    dates: &'a [Timestamp],
    storage_numbers: &'a [u32],
    columns: Vec<Column<'a>>,
    /// Indices into the parallel arrays, oldest first.
    order: Vec<usize>,
}

impl<'a> HistorySeries<'a> {
    fn new(
        id: &str,
        dates: Option<&'a [Timestamp]>,
        storage_numbers: Option<&'a [u32]>,
        columns: Vec<(&'static str, Option<&'a [f64]>)>,
    ) -> Self {
        let dates = dates.unwrap_or_default();
        let columns: Vec<Column<'a>> = columns
            .into_iter()
            .filter_map(|(name, values)| values.map(|values| (name, values)))
            .filter(|(_, values)| !values.is_empty())
            .collect();

        for (name, values) in &columns {
            if values.len() != dates.len() {
                debug!(
                    id,
                    metric = *name,
                    dates = dates.len(),
                    values = values.len(),
                    "history length mismatch, truncating"
                );
            }
        }

        let longest = columns
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0);
        let span = dates.len().min(longest);

        Self {
            dates,
            storage_numbers: storage_numbers.unwrap_or_default(),
            columns,
            order: chronological_order(&dates[..span]),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names of the metrics this series carries.
    pub fn metrics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> Records<'_, 'a> {
        Records {
            series: self,
            position: 0,
        }
    }

    fn record_at(&self, idx: usize) -> HistoryRecord {
        let metrics = self
            .columns
            .iter()
            .filter_map(|(name, values)| values.get(idx).map(|value| (*name, *value)))
            .collect();

        HistoryRecord {
            date: self.dates[idx],
            storage_number: self.storage_numbers.get(idx).copied(),
            metrics,
        }
    }
}

impl<'s, 'a> IntoIterator for &'s HistorySeries<'a> {
    type Item = HistoryRecord;
    type IntoIter = Records<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`HistorySeries`].
#[derive(Debug, Clone)]
pub struct Records<'s, 'a> {
    series: &'s HistorySeries<'a>,
    position: usize,
}

impl Iterator for Records<'_, '_> {
    type Item = HistoryRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = *self.series.order.get(self.position)?;
        self.position += 1;
        Some(self.series.record_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.order.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_, '_> {}

/// Selects the history columns of an entity and aligns them with its dates.
pub fn build(entity: &MeterEntity) -> HistorySeries<'_> {
    let id = entity.id();
    match entity {
        MeterEntity::Electricity(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![
                (metric::ENERGY, meter.history_energy_consumption_tariff1.as_deref()),
                (metric::PRODUCTION, meter.history_energy_production_tariff1.as_deref()),
            ],
        ),
        MeterEntity::Gas(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![
                (metric::VOLUME, meter.history_volume_consumption.as_deref()),
                (metric::MAX_FLOW, meter.history_volume_max_flow.as_deref()),
                (metric::MIN_FLOW, meter.history_volume_min_flow.as_deref()),
            ],
        ),
        MeterEntity::Water(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![
                (metric::VOLUME, meter.history_volume_consumption.as_deref()),
                (metric::MAX_FLOW, meter.history_volume_max_flow.as_deref()),
                (metric::MIN_FLOW, meter.history_volume_min_flow.as_deref()),
            ],
        ),
        MeterEntity::Heat(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![
                (metric::ENERGY, meter.history_energy_consumption.as_deref()),
                (metric::ENERGY_T1, meter.history_energy_consumption_t1.as_deref()),
                (metric::MAX_POWER, meter.history_max_power.as_deref()),
                (metric::MIN_POWER, meter.history_min_power.as_deref()),
                (metric::MAX_FLOW, meter.history_volume_max_flow.as_deref()),
                (metric::MIN_FLOW, meter.history_volume_min_flow.as_deref()),
            ],
        ),
        MeterEntity::HeatCostAllocator(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![(metric::ENERGY, meter.history_energy_consumption.as_deref())],
        ),
        MeterEntity::Generic(meter) => HistorySeries::new(
            id,
            meter.history_date.as_deref(),
            meter.history_storage_numbers.as_deref(),
            vec![(metric::CONSUMPTION, meter.history_consumption.as_deref())],
        ),
        MeterEntity::Breaker(_) | MeterEntity::Valve(_) | MeterEntity::Unrecognized(_) => {
            HistorySeries::new(id, None, None, Vec::new())
        }
    }
}

/// Source arrays are usually newest first but nothing guarantees it.
/// Reversed input is flipped, anything unsorted gets a stable sort.
fn chronological_order(dates: &[Timestamp]) -> Vec<usize> {
    if dates.windows(2).all(|pair| pair[0] <= pair[1]) {
        return (0..dates.len()).collect();
    }
    if dates.windows(2).all(|pair| pair[0] >= pair[1]) {
        return (0..dates.len()).rev().collect();
    }
    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.sort_by_key(|&idx| dates[idx]);
    order
}
