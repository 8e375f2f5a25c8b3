use broadside::{Grid, GridError, Position, Ship, ShipKind};

#[test]
fn test_new_grid_is_water() {
    let grid = Grid::new();
    for x in 0..10 {
        for y in 0..10 {
            let cell = grid.cell_at(Position::new(x, y));
            assert_eq!(cell.ship, None);
            assert!(!cell.guessed);
        }
    }
    assert!(grid.occupied().is_empty());
}

#[test]
fn test_place_claims_every_cell() {
    let mut grid = Grid::new();
    let ship = Ship::from_line("B 2 2 2 5").unwrap();
    grid.place(&ship).unwrap();
    for y in 2..=5 {
        assert_eq!(grid.cell_at(Position::new(2, y)).ship, Some(ShipKind::Battleship));
    }
    assert_eq!(grid.cell_at(Position::new(2, 6)).ship, None);
    assert_eq!(grid.occupied().count(), 4);
}

#[test]
fn test_overlap_is_atomic() {
    let mut grid = Grid::new();
    grid.place(&Ship::from_line("A 0 0 0 4").unwrap()).unwrap();
    let before = grid.clone();

    let crossing = Ship::from_line("S 0 2 2 2").unwrap();
    assert_eq!(
        grid.place(&crossing).unwrap_err(),
        GridError::Overlap {
            at: Position::new(0, 2),
            with: ShipKind::Carrier
        }
    );
    assert_eq!(grid, before);
    assert_eq!(grid.cell_at(Position::new(1, 2)).ship, None);
}

#[test]
fn test_cell_equality_by_position() {
    let mut grid = Grid::new();
    let empty = grid.cell_at(Position::new(3, 3));
    grid.place(&Ship::from_line("D 3 3 5 3").unwrap()).unwrap();
    grid.mark_guessed(Position::new(3, 3));
    let taken = grid.cell_at(Position::new(3, 3));
    assert_eq!(empty, taken);
    assert!(taken.guessed);
    assert_ne!(taken, grid.cell_at(Position::new(4, 3)));
}

#[test]
fn test_display_top_row_first() {
    let mut grid = Grid::new();
    grid.place(&Ship::from_line("P 0 9 1 9").unwrap()).unwrap();
    grid.mark_guessed(Position::new(1, 9));
    grid.mark_guessed(Position::new(9, 0));
    let text = grid.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "9  P x . . . . . . . .");
    assert_eq!(lines[9], "0  . . . . . . . . . o");
    assert_eq!(lines[10], "  0 1 2 3 4 5 6 7 8 9");
}

#[test]
#[should_panic]
fn test_cell_at_off_grid_panics() {
    let grid = Grid::new();
    grid.cell_at(Position::new(10, 0));
}
