use strsim::jaro_winkler;

use crate::error::{Result, WheelError};
use crate::models::Category;

/// Built-in categories, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Minimum Jaro-Winkler score for a fuzzy category match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// The set of categories the user can build a wheel from.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON.
    ///
    /// Rejects an empty catalog and any dish with a blank name or an
    /// out-of-range preference.
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;

        if categories.is_empty() {
            return Err(WheelError::InvalidInput(
                "catalog has no categories".to_string(),
            ));
        }

        for category in &categories {
            if let Some(dish) = category.dishes.iter().find(|d| !d.is_valid()) {
                return Err(WheelError::InvalidInput(format!(
                    "invalid dish in category '{}': {}",
                    category.id,
                    dish.debug_string()
                )));
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Position of a category by id or name.
    ///
    /// Tries an exact case-insensitive match first, then the closest fuzzy
    /// match above the similarity threshold.
    pub fn position(&self, query: &str) -> Result<usize> {
        if let Some(idx) = self.categories.iter().position(|c| c.matches(query)) {
            return Ok(idx);
        }

        let query_lower = query.trim().to_lowercase();
        let best = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let score = jaro_winkler(&c.id.to_lowercase(), &query_lower)
                    .max(jaro_winkler(&c.name.to_lowercase(), &query_lower));
                (i, score)
            })
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((idx, score)) => {
                log::debug!(
                    "Fuzzy matched '{}' to category '{}' ({:.2})",
                    query,
                    self.categories[idx].id,
                    score
                );
                Ok(idx)
            }
            None => Err(WheelError::CategoryNotFound(query.to_string())),
        }
    }

    /// Look up a category by id or name.
    pub fn find(&self, query: &str) -> Result<&Category> {
        self.position(query).map(|idx| &self.categories[idx])
    }
}
