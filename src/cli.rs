use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::error::{Result, WheelError};
use crate::wheel::{
    SpinConfig, DEFAULT_FRAME_MS, DEFAULT_MAX_TURNS, DEFAULT_MIN_TURNS, DEFAULT_PULSE_MS,
    DEFAULT_SPIN_MS, MAX_PREFERENCE, MIN_PREFERENCE,
};

/// Dish Wheel — spin a wheel to decide what to eat, weighted by preference.
#[derive(Parser, Debug)]
#[command(name = "dish_wheel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub timing: TimingArgs,

    /// Seed the random number generator for reproducible spins.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the animation and show results immediately.
    #[arg(long, global = true)]
    pub instant: bool,
}

/// Presentation timing of a spin.
#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    /// Length of the spin animation in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_SPIN_MS)]
    pub spin_ms: u64,

    /// Length of the winner highlight in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_PULSE_MS)]
    pub pulse_ms: u64,

    /// Minimum number of full turns per spin.
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_TURNS)]
    pub min_turns: u32,

    /// Maximum number of full turns per spin.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: u32,

    /// Delay between animation frames in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: u64,
}

impl TimingArgs {
    /// Build and validate the spin configuration.
    pub fn to_config(&self) -> Result<SpinConfig> {
        let config = SpinConfig {
            spin_duration: Duration::from_millis(self.spin_ms),
            pulse_duration: Duration::from_millis(self.pulse_ms),
            min_turns: self.min_turns,
            max_turns: self.max_turns,
            frame_interval: Duration::from_millis(self.frame_ms),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a category, add dishes and spin interactively.
    Play,

    /// Build a wheel and spin it without prompts.
    Spin {
        /// Category id or name.
        #[arg(short, long, default_value = "main")]
        category: String,

        /// Extra dish as NAME:PREFERENCE (repeatable), e.g. "Pizza:7".
        #[arg(short, long = "add", value_parser = parse_custom_dish)]
        add: Vec<(String, u8)>,

        /// Number of spins.
        #[arg(short, long, default_value = "1")]
        times: u32,
    },

    /// List categories and their dishes.
    List {
        /// Only show this category.
        #[arg(short, long)]
        category: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play
    }
}

/// Parse `NAME:PREFERENCE`; the preference must be within 1..=10.
pub fn parse_custom_dish(s: &str) -> Result<(String, u8)> {
    let (name, pref) = s
        .rsplit_once(':')
        .ok_or_else(|| WheelError::InvalidInput(format!("expected NAME:PREFERENCE, got '{}'", s)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(WheelError::InvalidInput("dish name must not be empty".to_string()));
    }

    let preference: u8 = pref
        .trim()
        .parse()
        .map_err(|_| WheelError::InvalidInput(format!("invalid preference '{}'", pref)))?;

    if !(MIN_PREFERENCE..=MAX_PREFERENCE).contains(&preference) {
        return Err(WheelError::InvalidInput(format!(
            "preference must be between {} and {}",
            MIN_PREFERENCE, MAX_PREFERENCE
        )));
    }

    Ok((name.to_string(), preference))
}
