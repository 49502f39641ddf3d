//! Secure random field elements via rejection sampling over 32-bit words.
//!
//! The entropy source is an injected capability (`SecureRng`) rather than a
//! global, so tests can supply a deterministic source without weakening the
//! production path, which is backed by `rand::rngs::OsRng`.

use rand::RngCore;
use thiserror::Error;

use crate::field::MODULUS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("no entropy source available")]
    NoEntropy,
}

/// Capability to fill a buffer of 32-bit words with cryptographically secure
/// randomness. Implementors must never reuse output across calls.
pub trait SecureRng {
    fn fill(&mut self, buf: &mut [u32]) -> Result<(), RngError>;
}

/// Production entropy source, backed by the operating system's CSPRNG.
pub struct OsRng(rand::rngs::OsRng);

impl OsRng {
    pub fn new() -> Self {
        OsRng(rand::rngs::OsRng)
    }
}

impl Default for OsRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRng for OsRng {
    fn fill(&mut self, buf: &mut [u32]) -> Result<(), RngError> {
        for word in buf.iter_mut() {
            *word = self.0.next_u32();
        }
        Ok(())
    }
}

fn draw_word(rng: &mut dyn SecureRng) -> Result<u32, RngError> {
    let mut buf = [0u32; 1];
    rng.fill(&mut buf)?;
    Ok(buf[0])
}

/// Draws a uniform integer in `[0, max]` by rejection sampling over 32-bit
/// words. The rejection probability per draw is below `(max+1)/2^32`, well
/// under one in a million for `max = 2052`.
pub fn get_random_int_inclusive(rng: &mut dyn SecureRng, max: u32) -> Result<u32, RngError> {
    let range = max as u64 + 1;
    let limit = (u32::MAX as u64 + 1) - ((u32::MAX as u64 + 1) % range);
    loop {
        let word = draw_word(rng)? as u64;
        if word < limit {
            return Ok((word % range) as u32);
        }
        log::warn!("rejection sampling redraw (range={range})");
    }
}

/// Draws a uniform field element in `[0, 2052]`.
pub fn get_random_field_element(rng: &mut dyn SecureRng) -> Result<u32, RngError> {
    get_random_int_inclusive(rng, MODULUS - 1)
}

#[cfg(test)]
pub(crate) struct CountingRng {
    next: u32,
}

#[cfg(test)]
impl CountingRng {
    pub fn new(seed: u32) -> Self {
        CountingRng { next: seed }
    }
}

#[cfg(test)]
impl SecureRng for CountingRng {
    fn fill(&mut self, buf: &mut [u32]) -> Result<(), RngError> {
        for word in buf.iter_mut() {
            *word = self.next;
            self.next = self.next.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        }
        Ok(())
    }
}
