use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::models::Dish;
use crate::wheel::config::SpinConfig;
use crate::wheel::constants::{FULL_TURN, HIGHLIGHT_ALPHA_AMPLITUDE, HIGHLIGHT_ALPHA_BASE};
use crate::wheel::sectors::{normalize_angle, pointer_angle, sector_at, shuffled_sectors, Sector};

/// Cubic ease-out: fast start, smooth deceleration to a stop.
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Receives the results of a spin as the animation reaches them.
pub trait SpinObserver {
    /// The wheel has come to rest on a winner.
    fn on_winner(&mut self, outcome: &SpinOutcome);

    /// The highlight pulse is over and the wheel accepts new spins.
    fn on_spin_finished(&mut self);
}

/// Result of one completed spin.
#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub dish: Dish,

    /// Index into the wheel's sectors.
    pub sector_index: usize,

    /// Resting rotation in `[0, 360)`.
    pub final_rotation: f64,

    /// Wheel angle under the pointer in `[0, 360)`.
    pub pointer_angle: f64,
}

/// Externally visible animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    Spinning,
    /// The winner is known and its sector is pulsing.
    Highlighting,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Spinning {
        started: Instant,
        start_rotation: f64,
        total_rotation: f64,
    },
    Highlighting {
        started: Instant,
        winner: usize,
    },
}

/// Weighted wheel plus the frame-driven state machine that spins it.
///
/// Call [`SpinningWheel::tick`] once per frame; results are delivered to the
/// [`SpinObserver`] passed to it. A spin runs to completion once started.
#[derive(Debug)]
pub struct SpinningWheel {
    config: SpinConfig,
    sectors: Vec<Sector>,
    rotation: f64,
    phase: Phase,
    pulse_phase: f64,
    last_outcome: Option<SpinOutcome>,
}

impl SpinningWheel {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            sectors: Vec::new(),
            rotation: 0.0,
            phase: Phase::Idle,
            pulse_phase: 0.0,
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Current displayed rotation in `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> SpinState {
        match self.phase {
            Phase::Idle => SpinState::Idle,
            Phase::Spinning { .. } => SpinState::Spinning,
            Phase::Highlighting { .. } => SpinState::Highlighting,
        }
    }

    /// True from an accepted spin request until the pulse has finished.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    /// Replace the dishes on the wheel with a fresh shuffle.
    ///
    /// Ignored while a spin is in flight; returns whether the wheel changed.
    pub fn set_dishes<R: Rng + ?Sized>(&mut self, dishes: &[Dish], rng: &mut R) -> bool {
        if self.is_busy() {
            log::warn!("Ignoring dish update while the wheel is spinning");
            return false;
        }
        self.sectors = shuffled_sectors(dishes, rng);
        self.last_outcome = None;
        log::debug!("Wheel rebuilt with {} sectors", self.sectors.len());
        true
    }

    /// Replace the sectors directly, keeping their order.
    pub fn set_sectors(&mut self, sectors: Vec<Sector>) -> bool {
        if self.is_busy() {
            log::warn!("Ignoring sector update while the wheel is spinning");
            return false;
        }
        self.sectors = sectors;
        self.last_outcome = None;
        true
    }

    /// Start a spin of a random number of full turns plus a random offset.
    ///
    /// Returns `false` without side effects if the wheel is empty or busy.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.can_spin() {
            return false;
        }
        let turns = rng.gen_range(self.config.min_turns..=self.config.max_turns);
        let offset = rng.gen_range(0.0..FULL_TURN);
        self.begin_spin(now, f64::from(turns) * FULL_TURN + offset)
    }

    /// Start a spin that rotates the wheel by exactly `total_rotation` degrees.
    pub fn begin_spin(&mut self, now: Instant, total_rotation: f64) -> bool {
        if !self.can_spin() {
            return false;
        }
        log::debug!(
            "Spinning {:.1} degrees from {:.1}",
            total_rotation,
            self.rotation
        );
        self.phase = Phase::Spinning {
            started: now,
            start_rotation: self.rotation,
            total_rotation,
        };
        self.pulse_phase = 0.0;
        true
    }

    fn can_spin(&self) -> bool {
        if self.is_busy() {
            log::debug!("Spin request ignored: already spinning");
            return false;
        }
        if self.sectors.is_empty() {
            log::debug!("Spin request ignored: wheel has no dishes");
            return false;
        }
        true
    }

    /// Advance the animation to `now`, notifying `observer` of any results.
    ///
    /// A single late tick may complete both the spin and the pulse.
    pub fn tick<O: SpinObserver + ?Sized>(&mut self, now: Instant, observer: &mut O) -> SpinState {
        loop {
            match self.phase {
                Phase::Idle => break,
                Phase::Spinning {
                    started,
                    start_rotation,
                    total_rotation,
                } => {
                    let progress = fraction(now, started, self.config.spin_duration);
                    let raw = start_rotation + total_rotation * ease_out_cubic(progress);
                    self.rotation = normalize_angle(raw);

                    if progress < 1.0 {
                        break;
                    }

                    match self.resolve_winner() {
                        Some(outcome) => {
                            log::debug!(
                                "Wheel stopped at {:.2} (pointer {:.2}): {}",
                                outcome.final_rotation,
                                outcome.pointer_angle,
                                outcome.dish.debug_string()
                            );
                            observer.on_winner(&outcome);
                            self.phase = Phase::Highlighting {
                                started: started + self.config.spin_duration,
                                winner: outcome.sector_index,
                            };
                            self.last_outcome = Some(outcome);
                        }
                        None => {
                            self.phase = Phase::Idle;
                            observer.on_spin_finished();
                        }
                    }
                }
                Phase::Highlighting { started, .. } => {
                    let progress = fraction(now, started, self.config.pulse_duration);
                    if progress < 1.0 {
                        self.pulse_phase = progress * TAU;
                        break;
                    }
                    self.phase = Phase::Idle;
                    self.pulse_phase = 0.0;
                    observer.on_spin_finished();
                }
            }
        }
        self.state()
    }

    fn resolve_winner(&self) -> Option<SpinOutcome> {
        let final_rotation = normalize_angle(self.rotation);
        let pointer = pointer_angle(final_rotation);
        let index = sector_at(&self.sectors, pointer)?;
        Some(SpinOutcome {
            dish: self.sectors[index].dish.clone(),
            sector_index: index,
            final_rotation,
            pointer_angle: pointer,
        })
    }

    /// Sector currently under the pointer.
    pub fn pointer_sector(&self) -> Option<&Sector> {
        sector_at(&self.sectors, pointer_angle(self.rotation)).map(|i| &self.sectors[i])
    }

    /// Winning sector index and its pulse intensity while highlighting.
    pub fn highlight(&self) -> Option<(usize, f64)> {
        match self.phase {
            Phase::Highlighting { winner, .. } => Some((
                winner,
                HIGHLIGHT_ALPHA_BASE + HIGHLIGHT_ALPHA_AMPLITUDE * self.pulse_phase.sin(),
            )),
            _ => None,
        }
    }

    /// The instant at which an in-flight spin will have fully settled.
    pub fn settles_at(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Spinning { started, .. } => {
                Some(started + self.config.spin_duration + self.config.pulse_duration)
            }
            Phase::Highlighting { started, .. } => Some(started + self.config.pulse_duration),
        }
    }
}

fn fraction(now: Instant, started: Instant, duration: Duration) -> f64 {
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
