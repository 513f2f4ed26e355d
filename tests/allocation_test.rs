use assert_float_eq::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dish_wheel_rs::models::Dish;
use dish_wheel_rs::wheel::{allocate_sectors, pointer_angle, sector_at, shuffled_sectors};

fn make_dish(id: &str, preference: u8) -> Dish {
    Dish::new(id, id.to_uppercase(), "", preference)
}

fn random_dishes(rng: &mut StdRng) -> Vec<Dish> {
    let count = rng.gen_range(1..=25);
    (0..count)
        .map(|i| make_dish(&format!("dish-{i}"), rng.gen_range(1..=10)))
        .collect()
}

#[test]
fn test_sector_sizes_sum_to_full_turn() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let dishes = random_dishes(&mut rng);
        let sectors = shuffled_sectors(&dishes, &mut rng);

        let total: f64 = sectors.iter().map(|s| s.size).sum();
        assert_float_absolute_eq!(total, 360.0, 1e-9);

        let last = sectors.last().unwrap();
        assert_float_absolute_eq!(last.end(), 360.0, 1e-9);
    }
}

#[test]
fn test_sector_sizes_proportional_to_weight() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let dishes = random_dishes(&mut rng);
        let total_weight: f64 = dishes.iter().map(|d| d.weight()).sum();
        let sectors = shuffled_sectors(&dishes, &mut rng);

        for sector in &sectors {
            assert!(sector.size >= 0.0);
            assert_float_absolute_eq!(
                sector.size,
                sector.dish.weight() / total_weight * 360.0,
                1e-9
            );
        }
    }
}

#[test]
fn test_sectors_are_contiguous() {
    let mut rng = StdRng::seed_from_u64(99);
    let dishes = random_dishes(&mut rng);
    let sectors = shuffled_sectors(&dishes, &mut rng);

    assert_float_absolute_eq!(sectors[0].start, 0.0, 1e-12);
    for pair in sectors.windows(2) {
        assert_float_absolute_eq!(pair[0].end(), pair[1].start, 1e-9);
    }
}

#[test]
fn test_every_pointer_angle_hits_exactly_one_sector() {
    let sectors = allocate_sectors(&[make_dish("a", 3), make_dish("b", 7), make_dish("c", 5)]);

    let mut angle = 0.0;
    while angle < 360.0 {
        let containing = sectors.iter().filter(|s| s.contains(angle)).count();
        assert_eq!(containing, 1, "angle {} matched {} sectors", angle, containing);
        assert!(sector_at(&sectors, angle).is_some());
        angle += 0.25;
    }
}

#[test]
fn test_example_one_one_two() {
    let dishes = [make_dish("a", 1), make_dish("b", 1), make_dish("c", 2)];
    let mut rng = StdRng::seed_from_u64(3);
    let sectors = shuffled_sectors(&dishes, &mut rng);

    let mut sizes: Vec<(String, f64)> = sectors
        .iter()
        .map(|s| (s.dish.id.clone(), s.size))
        .collect();
    sizes.sort_by(|a, b| a.0.cmp(&b.0));

    assert_float_absolute_eq!(sizes[0].1, 90.0, 1e-9);
    assert_float_absolute_eq!(sizes[1].1, 90.0, 1e-9);
    assert_float_absolute_eq!(sizes[2].1, 180.0, 1e-9);

    // A resting rotation of 0 leaves angle 0 under the pointer.
    let pointer = pointer_angle(0.0);
    assert_float_absolute_eq!(pointer, 0.0, 1e-12);
    let winner = sector_at(&sectors, pointer).unwrap();
    assert!(sectors[winner].contains(0.0));
    assert_eq!(winner, 0);
}

#[test]
fn test_empty_list_produces_no_sectors() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(shuffled_sectors(&[], &mut rng).is_empty());
}
