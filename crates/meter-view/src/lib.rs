//! Pure derivations from a meter entity to presentation view models:
//! decoded state labels, overview summaries, history series and tariff
//! registers.

use meter_model::{MeterEntity, VariantKind};
use thiserror::Error;

pub mod format;
pub mod history;
pub mod labels;
pub mod summary;
pub mod tariff;

pub use history::{build as build_history, HistoryRecord, HistorySeries};
pub use labels::{decode, Decode, SemanticClass, StateLabel};
pub use summary::{summarize, Summary};
pub use tariff::{present as present_tariffs, present_production, TariffSlot};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("meter {id} ({kind}) has no tariff register")]
    NotApplicable { id: String, kind: VariantKind },
}

impl ViewError {
    fn not_applicable(entity: &MeterEntity) -> Self {
        ViewError::NotApplicable {
            id: entity.id().to_string(),
            kind: entity.variant_kind(),
        }
    }
}
