use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, WheelError};
use crate::models::Category;
use crate::wheel::{preference_tier, DEFAULT_PREFERENCE, MAX_PREFERENCE, MIN_PREFERENCE};

/// Entries of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Spin,
    AddDish,
    CreateWheel,
    ShowDishes,
    ShowPrizes,
    ClearPrizes,
    SwitchCategory,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::Spin,
        MenuAction::AddDish,
        MenuAction::CreateWheel,
        MenuAction::ShowDishes,
        MenuAction::ShowPrizes,
        MenuAction::ClearPrizes,
        MenuAction::SwitchCategory,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Spin => "Spin the wheel",
            MenuAction::AddDish => "Add a dish",
            MenuAction::CreateWheel => "Create wheel",
            MenuAction::ShowDishes => "Show dishes in this category",
            MenuAction::ShowPrizes => "Show prizes",
            MenuAction::ClearPrizes => "Clear prizes",
            MenuAction::SwitchCategory => "Switch category",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next main-menu action.
pub fn prompt_menu_action(wheel_ready: bool) -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    // Point at "Create wheel" until there is something to spin.
    let default = if wheel_ready { 0 } else { 2 };

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for a category; returns its id.
pub fn prompt_category(categories: &[Category], current: &str) -> Result<String> {
    let options: Vec<String> = categories
        .iter()
        .map(|c| format!("{} ({} dishes)", c.name, c.dishes.len()))
        .collect();

    let default = categories
        .iter()
        .position(|c| c.id == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Pick a category")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(categories[selection].id.clone())
}

/// Prompt for a custom dish name; `None` if left blank.
pub fn prompt_dish_name() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Dish name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}

/// Prompt for a preference rating between 1 and 10.
pub fn prompt_preference(dish_name: &str) -> Result<u8> {
    let options: Vec<String> = (MIN_PREFERENCE..=MAX_PREFERENCE)
        .map(|p| format!("{:>2}/10 ({})", p, preference_tier(p)))
        .collect();

    let selection = Select::new()
        .with_prompt(format!("How much do you like '{}'?", dish_name))
        .items(&options)
        .default(usize::from(DEFAULT_PREFERENCE - MIN_PREFERENCE))
        .interact()?;

    u8::try_from(selection)
        .map(|s| s + MIN_PREFERENCE)
        .map_err(|_| WheelError::InvalidInput("Invalid preference".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
