//! Path A (direct field-element sums) and Path B (polynomial sums) for the
//! per-row and global checksums. The two paths must agree bit-exactly at
//! every share number; disagreement means corruption, never a legitimate
//! state.

use crate::field;
use crate::polynomial::{Polynomial, PolynomialError};

/// Path A: sums of plaintext or recovered word IDs, one per row of three.
pub fn compute_row_checks(ids: &[u32]) -> Vec<u32> {
    ids.chunks(3)
        .map(|row| row.iter().fold(0u32, |acc, &id| field::add(acc, id)))
        .collect()
}

/// Path A: sum of every word ID.
pub fn compute_global_integrity_check(ids: &[u32]) -> u32 {
    ids.iter().fold(0u32, |acc, &id| field::add(acc, id))
}

/// Path B: for each row of three word polynomials, the polynomial whose
/// evaluation at any `x` equals that row's Path A sum at that `x`.
pub fn compute_row_check_polynomials(word_polys: &[Polynomial]) -> Result<Vec<Polynomial>, PolynomialError> {
    word_polys
        .chunks(3)
        .map(Polynomial::sum)
        .collect()
}

/// Path B: the polynomial whose evaluation at any `x` equals the global
/// Path A sum at that `x`.
pub fn compute_global_integrity_check_polynomial(word_polys: &[Polynomial]) -> Result<Polynomial, PolynomialError> {
    Polynomial::sum(word_polys)
}
