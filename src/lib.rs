//! Linear-algebra reduction over the reals and GF(2).
//!
//! The GF(2) half recovers a hidden bit vector from oracle samples, the
//! post-processing step behind period-finding routines such as Simon's
//! algorithm: [`gf2::new_sample`] folds samples into an incremental basis one
//! at a time, [`gf2::complete_basis`] patches the one missing equation once
//! sampling stops at rank `n - 1`, and [`gf2::back_substitution_mod2`] reads
//! the hidden vector off the completed system. Rows are augmented
//! [`bitvec`] bit vectors; the augmented column stays zero until completion.
//!
//! The real half ([`real`]) is plain Gaussian elimination with partial
//! pivoting over `f64` augmented matrices. The two halves share nothing but
//! names.
//!
//! ```
//! use bitvec::prelude::*;
//! use period_cracker::gf2;
//!
//! // Oracle samples orthogonal to the hidden vector 001 (plus augmented 0).
//! let samples = [bitvec![0, 1, 0, 0], bitvec![1, 0, 0, 0], bitvec![1, 1, 0, 0]];
//! let mut basis = Vec::new();
//! for s in samples {
//!     basis = gf2::new_sample(basis, s.into_boxed_bitslice())?;
//! }
//! assert_eq!(gf2::rank(&basis), 2);
//!
//! let system = gf2::complete_basis(basis)?;
//! let hidden = gf2::back_substitution_mod2(system);
//! assert_eq!(hidden, bitvec![0, 0, 1].into_boxed_bitslice());
//! # Ok::<(), period_cracker::SolverError>(())
//! ```

pub mod error;
pub mod gf2;
pub mod real;

pub use error::{SolverError, SolverResult};
