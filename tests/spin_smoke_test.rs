use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use dish_wheel_rs::models::Dish;
use dish_wheel_rs::state::{Catalog, Session};
use dish_wheel_rs::wheel::{
    SpinConfig, SpinObserver, SpinOutcome, SpinState, SpinningWheel,
};

#[derive(Default)]
struct Recorder {
    winners: Vec<SpinOutcome>,
    finished: usize,
}

impl SpinObserver for Recorder {
    fn on_winner(&mut self, outcome: &SpinOutcome) {
        self.winners.push(outcome.clone());
    }

    fn on_spin_finished(&mut self) {
        self.finished += 1;
    }
}

fn sample_dishes() -> Vec<Dish> {
    vec![
        Dish::new("bun-cha", "Bún chả", "Grilled pork with vermicelli", 9),
        Dish::new("pho", "Phở", "Noodle soup", 7),
        Dish::new("banh-mi", "Bánh mì", "Baguette sandwich", 6),
        Dish::new("mien", "Miến nướng", "Glass noodles", 1),
    ]
}

fn fast_config() -> SpinConfig {
    SpinConfig {
        spin_duration: Duration::from_millis(400),
        pulse_duration: Duration::from_millis(100),
        ..SpinConfig::default()
    }
}

#[test]
fn test_completed_spin_reports_one_containing_winner() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut wheel = SpinningWheel::new(fast_config());
    assert!(wheel.set_dishes(&sample_dishes(), &mut rng));

    let mut rec = Recorder::default();
    let mut now = Instant::now();

    for _ in 0..50 {
        assert!(wheel.request_spin(now, &mut rng));
        now += Duration::from_millis(1000);
        assert_eq!(wheel.tick(now, &mut rec), SpinState::Idle);
    }

    assert_eq!(rec.winners.len(), 50);
    assert_eq!(rec.finished, 50);

    for outcome in &rec.winners {
        let sector = &wheel.sectors()[outcome.sector_index];
        assert!(sector.contains(outcome.pointer_angle));
        assert_eq!(sector.dish, outcome.dish);
        assert_eq!(
            wheel.sectors().iter().filter(|s| s.contains(outcome.pointer_angle)).count(),
            1
        );
    }
}

#[test]
fn test_frame_by_frame_spin_decelerates() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut wheel = SpinningWheel::new(fast_config());
    wheel.set_dishes(&sample_dishes(), &mut rng);

    let mut rec = Recorder::default();
    let t0 = Instant::now();
    // 5 full turns plus 200 degrees.
    assert!(wheel.begin_spin(t0, 2000.0));

    let mut unwrapped = 0.0;
    let mut previous = wheel.rotation();
    let mut steps = Vec::new();
    for frame in 1..=25 {
        let state = wheel.tick(t0 + Duration::from_millis(16 * frame), &mut rec);
        let mut delta = wheel.rotation() - previous;
        if delta < 0.0 {
            delta += 360.0;
        }
        unwrapped += delta;
        steps.push(delta);
        previous = wheel.rotation();
        if state != SpinState::Spinning {
            break;
        }
    }

    assert!((unwrapped - 2000.0).abs() < 1e-6);
    assert!(steps.first().unwrap() > steps.last().unwrap());
    assert_eq!(rec.winners.len(), 1);
}

#[test]
fn test_spin_request_during_spin_has_no_effect() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut wheel = SpinningWheel::new(fast_config());
    wheel.set_dishes(&sample_dishes(), &mut rng);

    let mut rec = Recorder::default();
    let t0 = Instant::now();
    assert!(wheel.begin_spin(t0, 1900.0));

    wheel.tick(t0 + Duration::from_millis(100), &mut rec);
    let mid_rotation = wheel.rotation();
    assert!(!wheel.request_spin(t0 + Duration::from_millis(100), &mut rng));
    assert_eq!(wheel.rotation(), mid_rotation);

    wheel.tick(t0 + Duration::from_secs(5), &mut rec);
    assert!((wheel.rotation() - 100.0).abs() < 1e-6);
    assert_eq!(rec.winners.len(), 1);
    assert_eq!(rec.finished, 1);
}

#[test]
fn test_empty_wheel_produces_no_winner() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut wheel = SpinningWheel::new(fast_config());
    wheel.set_dishes(&[], &mut rng);

    let mut rec = Recorder::default();
    let t0 = Instant::now();
    assert!(!wheel.request_spin(t0, &mut rng));
    wheel.tick(t0 + Duration::from_secs(5), &mut rec);

    assert!(rec.winners.is_empty());
    assert_eq!(rec.finished, 0);
    assert_eq!(wheel.state(), SpinState::Idle);
}

#[test]
fn test_heavier_dishes_win_more_often() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut wheel = SpinningWheel::new(fast_config());
    wheel.set_dishes(&sample_dishes(), &mut rng);

    let mut rec = Recorder::default();
    let mut now = Instant::now();
    for _ in 0..4000 {
        wheel.request_spin(now, &mut rng);
        now += Duration::from_secs(1);
        wheel.tick(now, &mut rec);
    }

    let mut wins: HashMap<String, usize> = HashMap::new();
    for outcome in &rec.winners {
        *wins.entry(outcome.dish.id.clone()).or_default() += 1;
    }

    // Weights 9 vs 1 out of 23: expected ~1565 vs ~174 wins.
    let heavy = wins.get("bun-cha").copied().unwrap_or(0);
    let light = wins.get("mien").copied().unwrap_or(0);
    assert!(heavy > light * 4, "bun-cha {} vs mien {}", heavy, light);
    assert!(light > 0);
}

#[test]
fn test_session_round_trip() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut session = Session::new(Catalog::builtin().unwrap(), fast_config()).unwrap();

    session.select_category("snack").unwrap();
    session.add_custom_dish("Bắp xào", 10).unwrap();
    assert_eq!(session.create_wheel(&mut rng).unwrap(), 11);

    let mut now = Instant::now();
    for _ in 0..3 {
        assert!(session.request_spin(now, &mut rng));
        now += Duration::from_secs(1);
        assert_eq!(session.tick(now), SpinState::Idle);
    }

    assert_eq!(session.prizes().len(), 3);
    let ids: Vec<u64> = session.prizes().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    session.clear_prizes();
    assert!(session.prizes().is_empty());

    // Rebuilding the wheel also starts a fresh history.
    session.request_spin(now, &mut rng);
    session.tick(now + Duration::from_secs(1));
    session.create_wheel(&mut rng).unwrap();
    assert!(session.prizes().is_empty());
}
