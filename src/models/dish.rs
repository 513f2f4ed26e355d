use serde::{Deserialize, Serialize};

use crate::wheel::constants::{MAX_PREFERENCE, MIN_PREFERENCE};

/// A dish that can be placed on the wheel.
///
/// Preference is the dish's weight on the wheel, on a scale of 1 to 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub preference: u8,
}

impl Dish {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        preference: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            preference,
        }
    }

    /// Weight used when allocating wheel sectors.
    #[inline]
    pub fn weight(&self) -> f64 {
        f64::from(self.preference)
    }

    /// Non-blank name and a preference within 1..=10.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && (MIN_PREFERENCE..=MAX_PREFERENCE).contains(&self.preference)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{} ({}): pref {}", self.name, self.id, self.preference)
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dish {}
