use broadside::{
    random_layout, validate_composition, Fleet, LoadError, Ship, ShipKind, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const FLEET: [&str; 5] = ["A 0 0 0 4", "B 2 2 2 5", "S 4 0 4 2", "D 6 0 6 2", "P 8 0 8 1"];

#[test]
fn test_valid_composition() {
    assert_eq!(validate_composition(FLEET), Ok(()));
}

#[test]
fn test_composition_ignores_geometry() {
    let lines = ["A 0 0 9 9", "B x", "S", "D -5 -5 -5 -5", "P 1 1 1 1 1 1"];
    assert_eq!(validate_composition(lines), Ok(()));
}

#[test]
fn test_duplicate_type() {
    let lines = ["A 0 0 0 4", "B 2 2 2 5", "S 4 0 4 2", "S 6 0 6 2", "P 8 0 8 1"];
    assert_eq!(validate_composition(lines), Err(LoadError::Composition));
}

#[test]
fn test_wrong_count() {
    assert_eq!(
        validate_composition(FLEET[..4].iter().copied()),
        Err(LoadError::Composition)
    );
    let six = FLEET.iter().copied().chain(["P 9 0 9 1"]);
    assert_eq!(validate_composition(six), Err(LoadError::Composition));
    assert_eq!(validate_composition(Vec::<&str>::new()), Err(LoadError::Composition));
}

#[test]
fn test_unknown_type() {
    let lines = ["A 0 0 0 4", "B 2 2 2 5", "S 4 0 4 2", "D 6 0 6 2", "X 8 0 8 1"];
    assert_eq!(validate_composition(lines), Err(LoadError::Composition));
}

#[test]
fn test_fleet_registry() {
    let mut fleet = Fleet::new();
    assert!(fleet.is_empty());
    for line in FLEET {
        assert!(fleet.insert(Ship::from_line(line).unwrap()).is_none());
    }
    assert!(fleet.is_complete());
    assert_eq!(fleet.len(), NUM_SHIPS);
    assert_eq!(fleet.remaining(), TOTAL_SHIP_CELLS);
    assert_eq!(fleet.cell_count(), TOTAL_SHIP_CELLS);
    assert!(!fleet.all_sunk());

    let patrol = fleet.get_mut(ShipKind::PatrolBoat).unwrap();
    patrol.hit();
    patrol.hit();
    assert!(fleet.get(ShipKind::PatrolBoat).unwrap().is_sunk());
    assert_eq!(fleet.remaining(), TOTAL_SHIP_CELLS - 2);
    assert_eq!(fleet.cell_count(), TOTAL_SHIP_CELLS);

    let kinds: Vec<_> = fleet.iter().map(|s| s.kind().code()).collect();
    assert_eq!(kinds, vec!['A', 'B', 'S', 'D', 'P']);
}

#[test]
fn test_random_layout_is_reproducible() {
    let a = random_layout(&mut SmallRng::seed_from_u64(7));
    let b = random_layout(&mut SmallRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.len(), NUM_SHIPS);
}
