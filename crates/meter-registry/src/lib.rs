//! Read-only, id-keyed snapshot of meter entities.

use std::collections::HashSet;
use std::sync::Arc;

use meter_model::{MeterEntity, UnrecognizedMeter, VariantKind};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

mod ordering;

pub use ordering::{classify, UpdateOrder, UpdateReport};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("meter {0} not found")]
    NotFound(String),
    #[error("duplicate meter id {0}")]
    DuplicateId(String),
    #[error("snapshot record {index} has no type tag")]
    MissingTag { index: usize },
    #[error("snapshot record {index} ({tag}) is malformed: {source}")]
    Entity {
        index: usize,
        tag: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable snapshot. Cloning shares the underlying entities.
#[derive(Debug, Clone)]
pub struct MeterRegistry {
    entities: Arc<[MeterEntity]>,
}

impl MeterRegistry {
    pub fn from_entities(entities: Vec<MeterEntity>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id()) {
                return Err(RegistryError::DuplicateId(entity.id().to_string()));
            }
        }

        Ok(Self {
            entities: entities.into(),
        })
    }

    pub fn from_json_str(data: &str) -> Result<Self, RegistryError> {
        Self::from_entities(parse_entities_from_json(data)?)
    }

    /// Entities in snapshot order.
    pub fn list(&self) -> &[MeterEntity] {
        &self.entities
    }

    pub fn get(&self, id: &str) -> Result<&MeterEntity, RegistryError> {
        self.find(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities reporting a nonzero device status.
    pub fn alerts(&self) -> impl Iterator<Item = &MeterEntity> {
        self.entities
            .iter()
            .filter(|entity| entity.common().has_alert())
    }

    /// Builds the snapshot that replaces `self`.
    ///
    /// Every entity of `next` replaces its predecessor whole. With
    /// `reject_out_of_order` set, an entity that arrives out of order keeps
    /// its previous snapshot instead. Entities missing from `next` are gone.
    pub fn apply_update(
        &self,
        next: MeterRegistry,
        reject_out_of_order: bool,
    ) -> (MeterRegistry, Vec<UpdateReport>) {
        let mut entities = Vec::with_capacity(next.len());
        let mut reports = Vec::with_capacity(next.len());

        for entity in next.list() {
            let previous = self.find(entity.id());
            let order = classify(previous, entity);
            let kept = match previous {
                Some(previous) if reject_out_of_order && order == UpdateOrder::OutOfOrder => {
                    warn!(id = %entity.id(), "out-of-order update rejected");
                    entities.push(previous.clone());
                    true
                }
                _ => {
                    entities.push(entity.clone());
                    false
                }
            };
            debug!(id = %entity.id(), ?order, kept_previous = kept, "entity replaced");
            reports.push(UpdateReport {
                id: entity.id().to_string(),
                order,
                kept_previous: kept,
            });
        }

        let registry = MeterRegistry {
            entities: entities.into(),
        };
        (registry, reports)
    }

    fn find(&self, id: &str) -> Option<&MeterEntity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotRoot {
    meters: Vec<Value>,
}

/// Decodes a snapshot given either as a bare array of entities or as
/// `{"meters": [...]}`.
pub fn parse_entities_from_json(data: &str) -> Result<Vec<MeterEntity>, RegistryError> {
    let records = match serde_json::from_str::<Vec<Value>>(data) {
        Ok(records) => records,
        Err(_) => serde_json::from_str::<SnapshotRoot>(data)?.meters,
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_entity(index, record))
        .collect()
}

fn decode_entity(index: usize, record: Value) -> Result<MeterEntity, RegistryError> {
    let tag = record
        .get("type")
        .and_then(Value::as_str)
        .ok_or(RegistryError::MissingTag { index })?
        .to_string();

    if VariantKind::from_tag(&tag).is_some() {
        return serde_json::from_value(record)
            .map_err(|source| RegistryError::Entity { index, tag, source });
    }

    let unrecognized: UnrecognizedMeter = serde_json::from_value(record)
        .map_err(|source| RegistryError::Entity {
            index,
            tag: tag.clone(),
            source,
        })?;
    warn!(
        index,
        id = %unrecognized.common.id,
        tag = %tag,
        "unrecognized functional block"
    );
    Ok(MeterEntity::Unrecognized(unrecognized))
}
