mod config;
pub mod detail;

pub use config::DisplayConfig;
pub use detail::{load_snapshot, MeterDetail};
