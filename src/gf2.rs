//! Incremental linear algebra over GF(2).
//!
//! Samples from the oracle are augmented bit rows (`n` coefficient columns
//! plus one augmented column, zero until completion). [`new_sample`] folds
//! them one at a time into a basis kept sorted by pivot position, so that
//! once the basis reaches rank `n - 1`, [`complete_basis`] can synthesize the
//! single missing equation and [`back_substitution_mod2`] can read the hidden
//! vector back out.

use bitvec::{bitbox, boxed::BitBox};
use tracing::{debug, trace};

use crate::error::{SolverError, SolverResult};

/// Elementwise XOR of two bit vectors of equal length.
pub fn add_mod2(v: &BitBox, w: &BitBox) -> SolverResult<BitBox> {
    if v.len() != w.len() {
        return Err(SolverError::LengthMismatch {
            expected: v.len(),
            actual: w.len(),
        });
    }
    let mut out = v.clone();
    out ^= w;
    Ok(out)
}

/// Column index of the leftmost set bit, or `v.len()` if none is set.
///
/// The sentinel compares greater than every real column index, so an
/// all-zero row never wins an insertion-order comparison.
pub fn pivot_position(v: &BitBox) -> usize {
    v.first_one().unwrap_or(v.len())
}

/// Number of non-zero rows in a bit matrix.
pub fn rank(matrix: &[BitBox]) -> usize {
    matrix.iter().filter(|row| row.any()).count()
}

/// Folds one oracle sample into the basis.
///
/// Walks the rows once, in ascending pivot order. Whenever `z` shares a pivot
/// with a row it is reduced by that row, which strictly moves its pivot to
/// the right. `z` is inserted at the position that keeps pivots strictly
/// increasing, or discarded if it reduces to zero (a linearly dependent
/// sample, which is the common case and not an error).
pub fn new_sample(mut basis: Vec<BitBox>, mut z: BitBox) -> SolverResult<Vec<BitBox>> {
    if let Some(first) = basis.first() {
        if first.len() != z.len() {
            return Err(SolverError::LengthMismatch {
                expected: first.len(),
                actual: z.len(),
            });
        }
    }

    if basis.is_empty() {
        if z.any() {
            basis.push(z);
        }
        return Ok(basis);
    }

    for i in 0..basis.len() {
        if pivot_position(&z) == pivot_position(&basis[i]) {
            z = add_mod2(&z, &basis[i])?;
        }
        // The zero sentinel can never satisfy this, but the guard is kept
        // explicit so no code path can insert an all-zero row.
        if z.any() && pivot_position(&z) < pivot_position(&basis[i]) {
            basis.insert(i, z);
            return Ok(basis);
        }
    }

    let last_pivot = basis.last().map(pivot_position).unwrap_or(0);
    if z.any() && pivot_position(&z) > last_pivot {
        basis.push(z);
    } else {
        trace!(rows = basis.len(), "dependent sample absorbed");
    }
    Ok(basis)
}

/// Extends a rank-deficiency-1 basis to a fully pivoted system.
///
/// The basis rows have pivots `0..n` with exactly one column skipped; a unit
/// row for the skipped column is inserted, carrying a 1 in the augmented
/// column as the seed the solver propagates. Any other deficiency fails the
/// postcondition and is reported as [`SolverError::MalformedBasis`].
pub fn complete_basis(basis: Vec<BitBox>) -> SolverResult<Vec<BitBox>> {
    let mut rows = basis;
    let width = match rows.first() {
        Some(row) => row.len(),
        None => {
            return Err(SolverError::MalformedBasis(
                "empty basis: column count unknown".into(),
            ))
        }
    };
    if width < 2 {
        return Err(SolverError::MalformedBasis(
            "rows must have at least one coefficient column".into(),
        ));
    }
    let n = width - 1;

    let mut patched = false;
    for i in 0..rows.len().saturating_sub(1) {
        if pivot_position(&rows[i]) == i && pivot_position(&rows[i + 1]) != i + 1 {
            debug!(column = i + 1, "synthesizing missing basis row");
            rows.insert(i + 1, unit_row(width, i + 1));
            patched = true;
            break;
        }
    }
    if !patched {
        if pivot_position(&rows[0]) == 0 {
            debug!(column = n - 1, "synthesizing missing basis row");
            rows.push(unit_row(width, n - 1));
        } else {
            debug!(column = 0, "synthesizing missing basis row");
            rows.insert(0, unit_row(width, 0));
        }
    }

    if rows.len() != n {
        return Err(SolverError::MalformedBasis(format!(
            "rank deficiency is not 1: {} rows after completion, {} columns",
            rows.len(),
            n
        )));
    }
    for (i, row) in rows.iter().enumerate() {
        if pivot_position(row) != i {
            return Err(SolverError::MalformedBasis(format!(
                "row {} has pivot {}, expected {}",
                i,
                pivot_position(row),
                i
            )));
        }
    }
    Ok(rows)
}

/// Unit row for `column`, with the augmented marker bit set.
fn unit_row(width: usize, column: usize) -> BitBox {
    let mut row = bitbox![0; width];
    row.set(column, true);
    row.set(width - 1, true);
    row
}

/// Solves a completed system by back-substitution mod 2.
///
/// Row `i`'s augmented bit is the solution bit `x[i]`; once known, it is
/// folded into the augmented column of every earlier row with a 1 in column
/// `i`. Addition and subtraction coincide in GF(2), so propagation is XOR.
pub fn back_substitution_mod2(mut system: Vec<BitBox>) -> BitBox {
    let n = system.len();
    let mut x = bitbox![0; n];
    for i in (0..n).rev() {
        let aug = system[i].len() - 1;
        let xi = system[i][aug];
        x.set(i, xi);
        if xi {
            for j in 0..i {
                if system[j][i] {
                    let aug = system[j].len() - 1;
                    let flipped = !system[j][aug];
                    system[j].set(aug, flipped);
                }
            }
        }
    }
    x
}
