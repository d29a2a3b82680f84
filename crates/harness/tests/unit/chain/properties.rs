//! # Chain Invariant Properties
//!
//! For any permutation of positions assigned to fields of arbitrary widths:
//! the chain length equals the record count, and every field's positions
//! come back ordered by bit significance.

use proptest::prelude::*;
use scanchain_core::chain::{Chain, Record};

/// Field widths plus a permutation of `0..sum(widths)` to lay them out.
fn layout() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    prop::collection::vec(1usize..8, 1..6).prop_flat_map(|widths| {
        let total: usize = widths.iter().sum();
        let perm = Just((0..total).collect::<Vec<_>>()).prop_shuffle();
        (Just(widths), perm)
    })
}

fn records(widths: &[usize], perm: &[usize]) -> Vec<Record> {
    let mut out = Vec::new();
    let mut next = 0;
    for (f, &w) in widths.iter().enumerate() {
        for bit in 0..w {
            out.push(Record::new(perm[next], format!("f{f}"), bit));
            next += 1;
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_total_length_is_record_count((widths, perm) in layout()) {
        let recs = records(&widths, &perm);
        let chain = Chain::build(&recs).unwrap();
        prop_assert_eq!(chain.total_length(), recs.len());
        let sizes: usize = chain.fields().map(|f| f.size()).sum();
        prop_assert_eq!(sizes, recs.len());
    }

    #[test]
    fn prop_positions_ordered_by_significance((widths, perm) in layout()) {
        let recs = records(&widths, &perm);
        let mut shuffled = recs.clone();
        shuffled.reverse();
        let chain = Chain::build(&shuffled).unwrap();
        for (f, &w) in widths.iter().enumerate() {
            let field = chain.field(&format!("f{f}")).unwrap();
            prop_assert_eq!(field.size(), w);
            for (bit, &pos) in field.positions().iter().enumerate() {
                let expected = recs
                    .iter()
                    .find(|r| r.field == field.name() && r.bit == bit)
                    .map(|r| r.position);
                prop_assert_eq!(Some(pos), expected);
            }
        }
    }

    #[test]
    fn prop_dropping_a_record_breaks_density((widths, perm) in layout()) {
        let mut recs = records(&widths, &perm);
        let total = recs.len();
        // Removing anything but the highest position leaves a hole.
        if let Some(idx) = recs.iter().position(|r| r.position + 1 != total) {
            let _ = recs.remove(idx);
            prop_assert!(Chain::build(&recs).is_err());
        }
    }
}
