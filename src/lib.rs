pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod wheel;

pub use error::{Result, WheelError};
pub use models::{Category, Dish, Prize};
pub use wheel::{SpinConfig, SpinObserver, SpinOutcome, SpinningWheel};
