use std::thread;
use std::time::Instant;

use rand::Rng;

use crate::error::Result;
use crate::interface::render::{display_winner, draw_spin_frame};
use crate::models::Prize;
use crate::state::Session;
use crate::wheel::SpinState;

/// How a spin is presented on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinMode {
    /// Redraw every frame until the wheel settles.
    Animated,
    /// Jump straight to the settled state.
    Instant,
}

/// Spin the session's wheel once and drive it until it settles.
///
/// Returns the recorded prize, or `None` if the wheel could not spin.
pub fn run_spin<R: Rng + ?Sized>(
    session: &mut Session,
    rng: &mut R,
    mode: SpinMode,
) -> Result<Option<Prize>> {
    let started = Instant::now();
    if !session.request_spin(started, rng) {
        return Ok(None);
    }

    match mode {
        SpinMode::Instant => {
            if let Some(settled) = session.wheel().settles_at() {
                session.tick(settled);
            }
        }
        SpinMode::Animated => {
            let frame = session.wheel().config().frame_interval;
            loop {
                let state = session.tick(Instant::now());
                draw_spin_frame(session.wheel())?;
                if state == SpinState::Idle {
                    break;
                }
                thread::sleep(frame);
            }
        }
    }

    if let Some(outcome) = session.wheel().last_outcome() {
        display_winner(outcome);
    }

    Ok(session.history().latest().cloned())
}
