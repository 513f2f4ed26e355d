use std::io::{self, Write};

use crate::models::{Category, Dish, Prize};
use crate::wheel::{preference_tier, Sector, SpinningWheel, SpinOutcome};

/// Width of the bar drawn for each sector's share of the wheel.
const SHARE_BAR_WIDTH: usize = 30;

/// Display the category headline.
pub fn display_category_header(category: &Category) {
    println!();
    println!("=== {} ===", category.name);
    println!("{}", category.title);
    println!();
}

/// Display the dishes of a category or any other dish list.
pub fn display_dish_list(dishes: &[Dish], title: &str) {
    if dishes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, dishes.len());
    println!();

    let width = name_width(dishes.iter().map(|d| d.name.as_str()));

    for dish in dishes {
        println!(
            "  {:<width$}  {:>2}/10 {:<8}  {}",
            dish.name,
            dish.preference,
            preference_tier(dish.preference),
            dish.description,
            width = width
        );
    }

    println!();
}

/// Display the wheel's sectors with their angles and share of the wheel.
pub fn display_sectors(sectors: &[Sector]) {
    if sectors.is_empty() {
        println!("Add some dishes to build the wheel.");
        return;
    }

    println!();
    println!("=== Wheel ({} dishes) ===", sectors.len());
    println!();

    let width = name_width(sectors.iter().map(|s| s.dish.name.as_str()));

    for (i, sector) in sectors.iter().enumerate() {
        let filled = ((sector.share() / 100.0) * SHARE_BAR_WIDTH as f64).round() as usize;
        println!(
            "{:>3}. {:<width$}  {:>6.1}° - {:>6.1}°  {:>5.1}%  {}",
            i + 1,
            sector.dish.name,
            sector.start,
            sector.end(),
            sector.share(),
            "#".repeat(filled.max(1)),
            width = width
        );
    }

    println!();
}

/// Redraw the single status line for the current animation frame.
pub fn draw_spin_frame(wheel: &SpinningWheel) -> io::Result<()> {
    let under_pointer = wheel
        .pointer_sector()
        .map(|s| s.dish.name.as_str())
        .unwrap_or("-");

    let line = match wheel.highlight() {
        Some((_, intensity)) => {
            // Pulse width follows the highlight intensity (0.0..=0.6).
            let stars = "*".repeat(1 + (intensity * 5.0).round().max(0.0) as usize);
            format!("{stars} {under_pointer} {stars}")
        }
        None => format!("▼ {:>6.1}°  {}", wheel.rotation(), under_pointer),
    };

    let mut out = io::stdout().lock();
    // Clear the line before redrawing so shorter names leave no residue.
    write!(out, "\r\x1b[2K{}", line)?;
    out.flush()
}

/// Finish the animated line and announce the winner.
pub fn display_winner(outcome: &SpinOutcome) {
    println!();
    println!(
        "The wheel picked: {} ({}/10) - {}",
        outcome.dish.name, outcome.dish.preference, outcome.dish.description
    );
}

/// Display the prize history.
pub fn display_prizes(prizes: &[Prize]) {
    println!();
    println!("=== Prizes ({}) ===", prizes.len());
    println!();

    if prizes.is_empty() {
        println!("No results yet. Spin the wheel to find your lucky dish!");
        println!();
        return;
    }

    let width = name_width(prizes.iter().map(|p| p.dish.name.as_str()));

    for (i, prize) in prizes.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>2}/10  {}",
            i + 1,
            prize.dish.name,
            prize.dish.preference,
            prize.dish.description,
            width = width
        );
    }

    println!();
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(10)
}
