//! Polynomials over GF(2053): random construction, Horner evaluation, and
//! coefficient-wise sum.

use thiserror::Error;
use zeroize::Zeroize;

use crate::field;
use crate::rng::{self, RngError, SecureRng};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("cannot sum polynomials of differing degree")]
    DegreeMismatch,
}

/// A polynomial `a0 + a1*x + ... + a_{k-1}*x^(k-1)` over GF(2053). `a0` is the
/// secret for a word polynomial; the remaining coefficients are uniform
/// random field elements.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    pub coefficients: Vec<u32>,
}

impl Polynomial {
    /// Builds a degree-`degree` polynomial with `coefficients[0] = secret`
    /// and the rest drawn uniformly from `rng`. `degree == 0` yields a
    /// constant polynomial.
    pub fn random(secret: u32, degree: usize, rng: &mut dyn SecureRng) -> Result<Self, RngError> {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(field::reduce(secret as i64));
        for _ in 0..degree {
            coefficients.push(rng::get_random_field_element(rng)?);
        }
        Ok(Polynomial { coefficients })
    }

    /// Evaluates the polynomial at `x` via Horner's method, from the
    /// highest-degree coefficient down.
    pub fn evaluate(&self, x: u32) -> u32 {
        let x = field::reduce(x as i64);
        let mut acc = 0u32;
        for coef in self.coefficients.iter().rev() {
            acc = field::add(field::mul(acc, x), *coef);
        }
        acc
    }

    /// Coefficient-wise sum of polynomials that must all share the same
    /// degree (this scheme only ever sums polynomials built with the same
    /// threshold `k`).
    pub fn sum(polys: &[Polynomial]) -> Result<Polynomial, PolynomialError> {
        let len = match polys.first() {
            Some(p) => p.coefficients.len(),
            None => return Ok(Polynomial { coefficients: Vec::new() }),
        };
        if polys.iter().any(|p| p.coefficients.len() != len) {
            return Err(PolynomialError::DegreeMismatch);
        }
        let mut out = vec![0u32; len];
        for p in polys {
            for (acc, coef) in out.iter_mut().zip(&p.coefficients) {
                *acc = field::add(*acc, *coef);
            }
        }
        Ok(Polynomial { coefficients: out })
    }
}
