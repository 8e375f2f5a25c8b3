use broadside::{CellMask, MaskError, Position};

#[test]
fn test_try_new_sizes() {
    assert!(CellMask::<u128, 10>::try_new().is_ok());
    let err = CellMask::<u64, 10>::try_new();
    assert!(matches!(err, Err(MaskError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_insert_contains_remove() {
    let mut mask = CellMask::<u16, 4>::new();
    assert!(mask.is_empty());

    mask.insert(Position::new(1, 2)).unwrap();
    assert!(mask.contains(Position::new(1, 2)).unwrap());
    assert!(!mask.contains(Position::new(2, 1)).unwrap());
    assert_eq!(mask.count(), 1);

    mask.remove(Position::new(1, 2)).unwrap();
    assert!(mask.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut mask = CellMask::<u16, 4>::new();
    assert_eq!(
        mask.insert(Position::new(4, 0)).unwrap_err(),
        MaskError::OutOfBounds { x: 4, y: 0 }
    );
    assert!(mask.contains(Position::new(0, 7)).is_err());
}

#[test]
fn test_iter_row_major() {
    let mask = CellMask::<u128, 10>::from_positions([
        Position::new(3, 9),
        Position::new(0, 1),
        Position::new(9, 0),
    ])
    .unwrap();
    let cells: Vec<_> = mask.iter().collect();
    assert_eq!(
        cells,
        vec![Position::new(9, 0), Position::new(0, 1), Position::new(3, 9)]
    );
}

#[test]
fn test_intersects_and_ops() {
    let a = CellMask::<u128, 10>::from_positions([Position::new(0, 0), Position::new(1, 0)]).unwrap();
    let b = CellMask::<u128, 10>::from_positions([Position::new(1, 0), Position::new(2, 0)]).unwrap();
    let c = CellMask::<u128, 10>::from_positions([Position::new(5, 5)]).unwrap();

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Position::new(1, 0)]);
    assert_eq!((a | b).count(), 3);

    let mut d = a;
    d |= c;
    assert_eq!(d.count(), 3);
}
