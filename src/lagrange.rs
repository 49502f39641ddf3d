//! Lagrange interpolation at `x = 0`, the operation recover uses to turn `k`
//! shares back into a secret.

use std::collections::HashSet;

use thiserror::Error;

use crate::field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LagrangeError {
    #[error("need at least two points to interpolate")]
    TooFewShares,
    #[error("share number zero is not a valid interpolation point")]
    ZeroShareNumber,
    #[error("duplicate share number in interpolation set")]
    DuplicateShareNumber,
}

fn validate_share_numbers(xs: &[u32]) -> Result<(), LagrangeError> {
    if xs.len() < 2 {
        return Err(LagrangeError::TooFewShares);
    }
    if xs.iter().any(|&x| x == 0) {
        return Err(LagrangeError::ZeroShareNumber);
    }
    let mut seen = HashSet::with_capacity(xs.len());
    for &x in xs {
        if !seen.insert(x) {
            return Err(LagrangeError::DuplicateShareNumber);
        }
    }
    Ok(())
}

/// Interpolates the unique degree-`<len-1` polynomial through `points` and
/// evaluates it at `x = 0`.
pub fn interpolate_at_zero(points: &[(u32, u32)]) -> Result<u32, LagrangeError> {
    let xs: Vec<u32> = points.iter().map(|(x, _)| *x).collect();
    let multipliers = lagrange_multipliers(&xs)?;
    let mut secret = 0u32;
    for ((_, y), gamma) in points.iter().zip(multipliers) {
        secret = field::add(secret, field::mul(*y, gamma));
    }
    Ok(secret)
}

/// Precomputes `gamma_j = prod_{m != j} (-x_m) / (x_j - x_m)` for a fixed set
/// of share numbers, independent of the `y` values. Lets a human reconstruct
/// a secret with `k` multiplications and additions once `gamma` is known.
pub fn lagrange_multipliers(share_numbers: &[u32]) -> Result<Vec<u32>, LagrangeError> {
    validate_share_numbers(share_numbers)?;
    let mut out = Vec::with_capacity(share_numbers.len());
    for (j, &x_j) in share_numbers.iter().enumerate() {
        let mut numerator = 1u32;
        let mut denominator = 1u32;
        for (m, &x_m) in share_numbers.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator = field::mul(numerator, field::sub(0, x_m));
            denominator = field::mul(denominator, field::sub(x_j, x_m));
        }
        let inv_denominator =
            field::inv(denominator).expect("distinct nonzero share numbers give nonzero denominator");
        out.push(field::mul(numerator, inv_denominator));
    }
    Ok(out)
}
