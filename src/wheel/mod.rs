pub mod animator;
pub mod config;
pub mod constants;
pub mod sectors;

pub use animator::{ease_out_cubic, SpinObserver, SpinOutcome, SpinState, SpinningWheel};
pub use config::SpinConfig;
pub use constants::*;
pub use sectors::{allocate_sectors, normalize_angle, pointer_angle, sector_at, shuffled_sectors, Sector};
