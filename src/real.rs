//! Gaussian elimination over the reals.
//!
//! Independent of the GF(2) module: augmented matrices are `Vec<Vec<f64>>`,
//! reduction uses partial pivoting, and back-substitution reports `None` for
//! any variable it cannot pin down.

use tracing::warn;

/// Reduces an augmented matrix to row echelon form with partial pivoting.
pub fn row_echelon_form(mut matrix: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let num_rows = matrix.len();
    if num_rows == 0 {
        return matrix;
    }
    let num_cols = matrix[0].len();

    for i in 0..num_rows.min(num_cols) {
        // Bring the largest remaining entry of column i onto the diagonal.
        let mut pivot = i;
        for k in i + 1..num_rows {
            if matrix[k][i].abs() > matrix[pivot][i].abs() {
                pivot = k;
            }
        }
        if matrix[pivot][i] == 0.0 {
            continue;
        }
        matrix.swap(i, pivot);

        for k in i + 1..num_rows {
            let c = -matrix[k][i] / matrix[i][i];
            for j in i..num_cols {
                if i == j {
                    matrix[k][j] = 0.0;
                } else {
                    matrix[k][j] += c * matrix[i][j];
                }
            }
        }
    }
    matrix
}

/// Solves an augmented linear system by elimination and back-substitution.
///
/// Underdetermined systems yield `None` for every row. In an overdetermined
/// system, echelon rows with a zero pivot entry contribute no slot, so a
/// consistent system still yields one value per variable.
pub fn solve(matrix: Vec<Vec<f64>>) -> Vec<Option<f64>> {
    let mut reduced = row_echelon_form(matrix);

    let num_rows = reduced.len();
    if num_rows == 0 {
        return Vec::new();
    }
    let num_cols = reduced[0].len();
    if num_cols < 2 {
        // Augmented column only: nothing to solve for.
        return Vec::new();
    }
    if num_rows + 1 < num_cols {
        warn!(
            equations = num_rows,
            variables = num_cols - 1,
            "not enough equations to solve all variables"
        );
        return vec![None; num_rows];
    }

    let mut x: Vec<Option<f64>> = vec![Some(0.0); num_rows];
    for i in (0..num_rows).rev() {
        let q = i.min(num_cols - 2);
        if reduced[i][q] == 0.0 {
            // Extra row beyond the variable count, or a rank-deficient row.
            x.remove(i);
            continue;
        }
        let value = reduced[i][num_cols - 1] / reduced[i][q];
        x[i] = Some(value);
        for j in (0..i).rev() {
            reduced[j][num_cols - 1] -= reduced[j][q] * value;
        }
    }
    x
}

/// Rank of a real matrix: non-zero rows of its row echelon form.
pub fn rank(matrix: Vec<Vec<f64>>) -> usize {
    row_echelon_form(matrix)
        .iter()
        .filter(|row| row.iter().any(|&v| v != 0.0))
        .count()
}
