use percolation::union_find::{UnionFind, UnionFindError};

use super::strategy::*;

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn test_singletons(n in 0..64usize) {
        let uf = UnionFind::new(n);
        prop_assert_eq!(uf.len(), n);
        prop_assert_eq!(uf.components(), n);
        for x in 0..n {
            prop_assert_eq!(uf.find(x), Ok(x));
        }
    }
}

proptest! {
    #[test]
    fn test_matches_naive_labelling((n, pairs) in unions_strategy()) {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &pairs {
            uf.union(a, b).expect("in range by construction");
        }

        let labels = naive_labels(n, &pairs);
        for a in 0..n {
            for b in 0..n {
                prop_assert_eq!(uf.connected(a, b), Ok(labels[a] == labels[b]));
            }
        }

        let mut distinct = labels.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(uf.components(), distinct.len());
    }

    #[test]
    fn test_union_is_idempotent((n, pairs) in unions_strategy()) {
        let mut uf = UnionFind::new(n);
        for &(a, b) in &pairs {
            uf.union(a, b).expect("in range by construction");
        }
        let components = uf.components();
        for &(a, b) in &pairs {
            uf.union(a, b).expect("in range by construction");
            prop_assert!(uf.connected(a, b).expect("in range by construction"));
        }
        prop_assert_eq!(uf.components(), components);
    }
}

#[test]
fn test_out_of_range() {
    let mut uf = UnionFind::new(3);
    let err = UnionFindError::OutOfRange { index: 3, len: 3 };
    assert_eq!(uf.union(0, 3), Err(err.clone()));
    assert_eq!(uf.union(3, 0), Err(err.clone()));
    assert_eq!(uf.connected(3, 1), Err(err.clone()));
    assert_eq!(uf.find(3), Err(err));
    assert_eq!(uf.components(), 3);
}

#[test]
fn test_empty() {
    let uf = UnionFind::new(0);
    assert!(uf.is_empty());
    assert_eq!(uf.components(), 0);
    assert_eq!(
        uf.find(0),
        Err(UnionFindError::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_error_message() {
    let err = UnionFindError::OutOfRange { index: 7, len: 5 };
    assert_eq!(
        err.to_string(),
        "element 7 is out of range for a union-find of 5 elements"
    );
}
