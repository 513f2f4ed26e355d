use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Dish;
use crate::wheel::constants::FULL_TURN;

/// A contiguous angular range of the wheel assigned to one dish.
#[derive(Debug, Clone)]
pub struct Sector {
    pub dish: Dish,

    /// Start angle in degrees, measured clockwise from the top of the wheel.
    pub start: f64,

    /// Angular size in degrees.
    pub size: f64,
}

impl Sector {
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.size
    }

    /// Half-open containment: `[start, end)`.
    #[inline]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.end()
    }

    /// Share of the wheel as a percentage.
    #[inline]
    pub fn share(&self) -> f64 {
        self.size / FULL_TURN * 100.0
    }
}

/// Partition a full turn into sectors proportional to each dish's weight.
///
/// Sectors are laid out consecutively from 0° in input order. An empty list,
/// or one whose weights sum to zero, yields no sectors.
pub fn allocate_sectors(dishes: &[Dish]) -> Vec<Sector> {
    let total: f64 = dishes.iter().map(Dish::weight).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut current = 0.0;
    dishes
        .iter()
        .map(|dish| {
            let size = dish.weight() / total * FULL_TURN;
            let sector = Sector {
                dish: dish.clone(),
                start: current,
                size,
            };
            current += size;
            sector
        })
        .collect()
}

/// Shuffle the dishes uniformly, then allocate sectors.
pub fn shuffled_sectors<R: Rng + ?Sized>(dishes: &[Dish], rng: &mut R) -> Vec<Sector> {
    let mut shuffled = dishes.to_vec();
    shuffled.shuffle(rng);
    allocate_sectors(&shuffled)
}

/// Normalize any angle into `[0, 360)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= FULL_TURN { 0.0 } else { a }
}

/// The wheel angle under the fixed pointer for a given rotation.
///
/// Rotating the wheel clockwise by `r` brings the point originally at
/// `360 - r` under the pointer at the top.
#[inline]
pub fn pointer_angle(rotation: f64) -> f64 {
    normalize_angle(FULL_TURN - normalize_angle(rotation))
}

/// Index of the sector containing `angle`.
///
/// When accumulated drift leaves the angle just past the last sector's end,
/// the last sector is returned.
pub fn sector_at(sectors: &[Sector], angle: f64) -> Option<usize> {
    let angle = normalize_angle(angle);
    sectors
        .iter()
        .position(|s| s.contains(angle))
        .or_else(|| sectors.len().checked_sub(1))
}
