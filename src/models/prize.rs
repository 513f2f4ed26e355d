use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Dish;

/// A winning dish recorded in the session's prize history.
#[derive(Debug, Clone)]
pub struct Prize {
    /// Sequence number within the session, starting at 1.
    pub id: u64,

    /// The dish the wheel landed on.
    pub dish: Dish,

    /// Milliseconds since the Unix epoch when the winner was selected.
    pub timestamp: u128,
}

impl Prize {
    pub fn new(id: u64, dish: Dish) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        Self {
            id,
            dish,
            timestamp,
        }
    }
}
