use meter_model::MeterEntity;
use serde::Serialize;

/// How a replacement snapshot relates to the one it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateOrder {
    /// No previous snapshot for this id.
    New,
    Advanced,
    Duplicate,
    OutOfOrder,
    /// Neither a sequence counter nor a current date on both sides.
    Unordered,
}

/// Outcome of replacing one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub id: String,
    pub order: UpdateOrder,
    /// The previous snapshot was retained instead of the incoming one.
    pub kept_previous: bool,
}

/// Orders two snapshots of the same entity.
///
/// The reception sequence counter is a wrapping one-byte counter and is
/// compared with serial-number arithmetic: a forward distance of 1..=127 is
/// an advance, anything beyond is treated as a late delivery. Without
/// counters on both sides the current date decides.
pub fn classify(previous: Option<&MeterEntity>, next: &MeterEntity) -> UpdateOrder {
    let previous = match previous {
        Some(previous) => previous.common(),
        None => return UpdateOrder::New,
    };
    let next = next.common();

    if let (Some(before), Some(after)) = (previous.rx_sequence_counter, next.rx_sequence_counter) {
        return match after.wrapping_sub(before) {
            0 => UpdateOrder::Duplicate,
            1..=127 => UpdateOrder::Advanced,
            _ => UpdateOrder::OutOfOrder,
        };
    }

    match (previous.current_date, next.current_date) {
        (Some(before), Some(after)) if after > before => UpdateOrder::Advanced,
        (Some(before), Some(after)) if after == before => UpdateOrder::Duplicate,
        (Some(_), Some(_)) => UpdateOrder::OutOfOrder,
        _ => UpdateOrder::Unordered,
    }
}
