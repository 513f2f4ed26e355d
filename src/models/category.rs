use serde::{Deserialize, Serialize};

use crate::models::Dish;

/// A tab of dishes the wheel can be built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,

    /// Short label shown in the category picker.
    pub name: String,

    /// Headline shown above the wheel.
    pub title: String,

    pub dishes: Vec<Dish>,
}

impl Category {
    /// Case-insensitive match against id or name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.id.to_lowercase() == query || self.name.to_lowercase() == query
    }
}
