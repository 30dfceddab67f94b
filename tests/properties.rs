//! Property tests for the incremental GF(2) basis.
//!
//! Verifies insertion idempotence, the strictly-increasing pivot invariant,
//! rank monotonicity, and full recovery of a hidden vector from its
//! orthogonal complement.

use bitvec::{bitbox, boxed::BitBox};
use period_cracker::gf2::{
    back_substitution_mod2, complete_basis, new_sample, pivot_position, rank,
};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// An augmented sample row of `n + 1` bits from the low bits of `mask`.
fn sample_row(n: usize, mask: u32) -> BitBox {
    let mut row = bitbox![0; n + 1];
    for i in 0..n {
        if mask >> i & 1 == 1 {
            row.set(i, true);
        }
    }
    row
}

/// A width `n` in 2..=7 together with a non-zero hidden vector of `n` bits.
fn arb_hidden() -> impl Strategy<Value = (usize, u32)> {
    (2usize..=7).prop_flat_map(|n| (Just(n), 1u32..(1 << n)))
}

/// A width together with an arbitrary batch of sample masks.
fn arb_sample_batch() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (2usize..=7).prop_flat_map(|n| (Just(n), proptest::collection::vec(0u32..(1 << n), 0..24)))
}

fn feed(basis: Vec<BitBox>, n: usize, mask: u32) -> Vec<BitBox> {
    new_sample(basis, sample_row(n, mask)).expect("sample width matches basis width")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Inserting every sample twice in a row leaves the same basis as
    /// inserting each once.
    #[test]
    fn insertion_is_idempotent((n, masks) in arb_sample_batch()) {
        let mut once = Vec::new();
        let mut twice = Vec::new();
        for &m in &masks {
            once = feed(once, n, m);
            twice = feed(twice, n, m);
            twice = feed(twice, n, m);
        }
        prop_assert_eq!(once, twice);
    }

    /// Pivot positions are strictly increasing after any sample sequence,
    /// and no row is zero.
    #[test]
    fn pivots_strictly_increase((n, masks) in arb_sample_batch()) {
        let mut basis = Vec::new();
        for &m in &masks {
            basis = feed(basis, n, m);
        }
        for row in &basis {
            prop_assert!(row.any());
        }
        for pair in basis.windows(2) {
            prop_assert!(pivot_position(&pair[0]) < pivot_position(&pair[1]));
        }
        prop_assert_eq!(rank(&basis), basis.len());
    }

    /// Rank never decreases and grows by at most one per sample.
    #[test]
    fn rank_is_monotone((n, masks) in arb_sample_batch()) {
        let mut basis = Vec::new();
        let mut prev = 0;
        for &m in &masks {
            basis = feed(basis, n, m);
            let r = rank(&basis);
            prop_assert!(r >= prev);
            prop_assert!(r <= prev + 1);
            prev = r;
        }
    }

    /// Feeding every vector orthogonal to a hidden `s` yields rank `n - 1`,
    /// and completion plus back-substitution recovers exactly `s`. Every
    /// accepted row stays orthogonal to the solution.
    #[test]
    fn recovers_hidden_vector((n, s) in arb_hidden()) {
        let mut basis = Vec::new();
        for y in 0..1u32 << n {
            if (y & s).count_ones() % 2 == 0 {
                basis = feed(basis, n, y);
            }
        }
        prop_assert_eq!(rank(&basis), n - 1);

        let accepted = basis.clone();
        let system = complete_basis(basis).expect("rank n-1 basis completes");
        let solution = back_substitution_mod2(system);

        prop_assert_eq!(solution.len(), n);
        for i in 0..n {
            prop_assert_eq!(solution[i], s >> i & 1 == 1);
        }
        for row in &accepted {
            let dot = (0..n).filter(|&i| row[i] && solution[i]).count();
            prop_assert_eq!(dot % 2, 0);
        }
    }
}
