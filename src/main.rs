use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dish_wheel_rs::cli::{Cli, Command};
use dish_wheel_rs::error::Result;
use dish_wheel_rs::interface::{
    display_category_header, display_dish_list, display_prizes, display_sectors,
    prompt_category, prompt_dish_name, prompt_menu_action, prompt_preference, prompt_yes_no,
    run_spin, MenuAction, SpinMode,
};
use dish_wheel_rs::state::{Catalog, Session};
use dish_wheel_rs::wheel::SpinConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.timing.to_config()?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mode = if cli.instant {
        SpinMode::Instant
    } else {
        SpinMode::Animated
    };

    match cli.command.unwrap_or_default() {
        Command::Play => cmd_play(config, &mut rng, mode),
        Command::Spin {
            category,
            add,
            times,
        } => cmd_spin(config, &mut rng, mode, &category, &add, times),
        Command::List { category } => cmd_list(category.as_deref()),
    }
}

/// Interactive session: pick a category, add dishes, spin.
fn cmd_play(config: SpinConfig, rng: &mut StdRng, mode: SpinMode) -> Result<()> {
    let mut session = Session::new(Catalog::builtin()?, config)?;

    let first = prompt_category(
        session.catalog().categories(),
        &session.selected_category().id,
    )?;
    session.select_category(&first)?;
    display_category_header(session.selected_category());

    loop {
        match prompt_menu_action(session.wheel_created())? {
            MenuAction::Spin => {
                if !session.wheel_created() {
                    println!("Create the wheel first.");
                    continue;
                }
                if run_spin(&mut session, rng, mode)?.is_none() {
                    println!("The wheel has no dishes to pick from.");
                }
            }
            MenuAction::AddDish => {
                let Some(name) = prompt_dish_name()? else {
                    continue;
                };
                let preference = prompt_preference(&name)?;
                let dish = session.add_custom_dish(&name, preference)?;
                println!("Added: {} ({}/10)", dish.name, dish.preference);
                if session.wheel_created() {
                    println!("Create the wheel again to put it on.");
                }
            }
            MenuAction::CreateWheel => {
                let count = session.create_wheel(rng)?;
                println!("Wheel created with {} dishes.", count);
                display_sectors(session.wheel().sectors());
            }
            MenuAction::ShowDishes => {
                let category = session.selected_category();
                display_dish_list(&category.dishes, &category.name);
                display_dish_list(session.custom_dishes(), "Custom dishes");
            }
            MenuAction::ShowPrizes => display_prizes(session.prizes()),
            MenuAction::ClearPrizes => {
                if session.prizes().is_empty() {
                    println!("No prizes to clear.");
                } else if prompt_yes_no("Clear all prizes?", false)? {
                    session.clear_prizes();
                    println!("Prizes cleared.");
                }
            }
            MenuAction::SwitchCategory => {
                let id = prompt_category(
                    session.catalog().categories(),
                    &session.selected_category().id,
                )?;
                if id == session.selected_category().id {
                    continue;
                }
                let discard = (session.custom_dishes().is_empty()
                    && session.prizes().is_empty())
                    || prompt_yes_no("Switching discards custom dishes and prizes. Continue?", true)?;
                if discard {
                    display_category_header(session.select_category(&id)?);
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// One-shot spins from the command line.
fn cmd_spin(
    config: SpinConfig,
    rng: &mut StdRng,
    mode: SpinMode,
    category: &str,
    custom: &[(String, u8)],
    times: u32,
) -> Result<()> {
    let mut session = Session::new(Catalog::builtin()?, config)?;
    display_category_header(session.select_category(category)?);

    for (name, preference) in custom {
        session.add_custom_dish(name, *preference)?;
    }

    session.create_wheel(rng)?;
    display_sectors(session.wheel().sectors());

    for _ in 0..times {
        if run_spin(&mut session, rng, mode)?.is_none() {
            println!("The wheel has no dishes to pick from.");
            return Ok(());
        }
    }

    display_prizes(session.prizes());
    Ok(())
}

/// Print the catalog.
fn cmd_list(category: Option<&str>) -> Result<()> {
    let catalog = Catalog::builtin()?;

    match category {
        Some(query) => {
            let category = catalog.find(query)?;
            display_category_header(category);
            display_dish_list(&category.dishes, &category.name);
        }
        None => {
            for category in catalog.categories() {
                display_dish_list(&category.dishes, &category.name);
            }
        }
    }

    Ok(())
}
