use std::time::Instant;

use rand::Rng;

use crate::error::{Result, WheelError};
use crate::models::{Category, Dish, Prize};
use crate::state::Catalog;
use crate::wheel::{
    SpinConfig, SpinObserver, SpinOutcome, SpinState, SpinningWheel, MAX_PREFERENCE,
    MIN_PREFERENCE,
};

/// Description given to dishes the user adds by hand.
const CUSTOM_DESCRIPTION: &str = "Custom dish";

/// Winners recorded during the session, in the order they were drawn.
#[derive(Debug, Default)]
pub struct PrizeHistory {
    prizes: Vec<Prize>,
    next_id: u64,
    completed_spins: u64,
}

impl PrizeHistory {
    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn latest(&self) -> Option<&Prize> {
        self.prizes.last()
    }

    /// Number of spins that have fully settled, including their pulse.
    pub fn completed_spins(&self) -> u64 {
        self.completed_spins
    }

    pub fn clear(&mut self) {
        self.prizes.clear();
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }
}

impl SpinObserver for PrizeHistory {
    fn on_winner(&mut self, outcome: &SpinOutcome) {
        self.next_id += 1;
        self.prizes.push(Prize::new(self.next_id, outcome.dish.clone()));
    }

    fn on_spin_finished(&mut self) {
        self.completed_spins += 1;
    }
}

/// In-memory state of one run: the selected category, custom dishes, the
/// wheel built from them and the prizes it has produced.
pub struct Session {
    catalog: Catalog,
    selected: usize,
    custom_dishes: Vec<Dish>,
    wheel_dishes: Vec<Dish>,
    wheel_created: bool,
    next_custom_id: u64,
    wheel: SpinningWheel,
    history: PrizeHistory,
}

impl Session {
    /// Start a session on the catalog's first category.
    pub fn new(catalog: Catalog, config: SpinConfig) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(WheelError::InvalidInput(
                "catalog has no categories".to_string(),
            ));
        }

        Ok(Self {
            catalog,
            selected: 0,
            custom_dishes: Vec::new(),
            wheel_dishes: Vec::new(),
            wheel_created: false,
            next_custom_id: 0,
            wheel: SpinningWheel::new(config),
            history: PrizeHistory::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> &Category {
        &self.catalog.categories()[self.selected]
    }

    /// Switch category, discarding custom dishes, the wheel and prizes.
    pub fn select_category(&mut self, query: &str) -> Result<&Category> {
        self.ensure_idle()?;
        let idx = self.catalog.position(query)?;

        self.selected = idx;
        self.custom_dishes.clear();
        self.wheel_dishes.clear();
        self.wheel_created = false;
        self.history.clear();
        self.wheel.set_sectors(Vec::new());

        log::info!("Selected category '{}'", self.selected_category().id);
        Ok(self.selected_category())
    }

    /// Add a dish of the user's own, to be included when the wheel is built.
    pub fn add_custom_dish(&mut self, name: &str, preference: u8) -> Result<&Dish> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WheelError::InvalidInput(
                "dish name must not be empty".to_string(),
            ));
        }
        if !(MIN_PREFERENCE..=MAX_PREFERENCE).contains(&preference) {
            return Err(WheelError::InvalidInput(format!(
                "preference must be between {} and {}, got {}",
                MIN_PREFERENCE, MAX_PREFERENCE, preference
            )));
        }

        self.next_custom_id += 1;
        let dish = Dish::new(
            format!("custom-{}", self.next_custom_id),
            name,
            CUSTOM_DESCRIPTION,
            preference,
        );
        log::debug!("Added custom dish {}", dish.debug_string());
        self.custom_dishes.push(dish);

        Ok(&self.custom_dishes[self.custom_dishes.len() - 1])
    }

    pub fn custom_dishes(&self) -> &[Dish] {
        &self.custom_dishes
    }

    /// Build the wheel from the category's dishes plus the custom ones.
    ///
    /// Clears the prize history. Returns the number of dishes on the wheel.
    pub fn create_wheel<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        self.ensure_idle()?;

        let dishes: Vec<Dish> = self
            .selected_category()
            .dishes
            .iter()
            .chain(self.custom_dishes.iter())
            .cloned()
            .collect();

        self.wheel.set_dishes(&dishes, rng);
        self.wheel_dishes = dishes;
        self.wheel_created = true;
        self.history.clear();

        Ok(self.wheel_dishes.len())
    }

    pub fn wheel_created(&self) -> bool {
        self.wheel_created
    }

    pub fn wheel_dishes(&self) -> &[Dish] {
        &self.wheel_dishes
    }

    pub fn wheel(&self) -> &SpinningWheel {
        &self.wheel
    }

    /// Ask the wheel to spin; ignored if it is empty or already spinning.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.wheel.request_spin(now, rng)
    }

    /// Advance the wheel's animation, recording any winner.
    pub fn tick(&mut self, now: Instant) -> SpinState {
        self.wheel.tick(now, &mut self.history)
    }

    pub fn history(&self) -> &PrizeHistory {
        &self.history
    }

    pub fn prizes(&self) -> &[Prize] {
        self.history.prizes()
    }

    pub fn clear_prizes(&mut self) {
        self.history.clear();
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.wheel.is_busy() {
            return Err(WheelError::SpinInProgress);
        }
        Ok(())
    }
}
