use percolation::percolation::Percolation;

#[test]
fn test_bottom_path_is_not_full() {
    // Column 1 is open from the bottom up to row 2, but row 1 stays blocked.
    let mut p = Percolation::new(3).unwrap();
    p.open(3, 1).unwrap();
    p.open(2, 1).unwrap();

    assert!(!p.percolates());
    assert!(!p.is_full(3, 1).unwrap());
    assert!(!p.is_full(2, 1).unwrap());
}

#[test]
fn test_no_backwash_after_percolation() {
    let mut p = Percolation::new(3).unwrap();
    for row in 1..=3 {
        p.open(row, 3).unwrap();
    }
    assert!(p.percolates());

    // Touches the bottom row, and through the virtual bottom node the top, but has no
    // open path to the top of its own.
    p.open(3, 1).unwrap();
    p.open(2, 1).unwrap();

    assert!(p.percolates());
    assert!(!p.is_full(3, 1).unwrap());
    assert!(!p.is_full(2, 1).unwrap());
    assert!(p.is_full(3, 3).unwrap());

    // Joining column 1 to column 3 along the middle row makes it full.
    p.open(2, 2).unwrap();
    assert!(p.is_full(2, 1).unwrap());
    assert!(p.is_full(3, 1).unwrap());
}
