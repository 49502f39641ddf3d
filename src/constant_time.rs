//! Constant-time comparison and best-effort zeroisation.
//!
//! These are the only primitives in the crate with a non-functional
//! requirement: no branch here may depend on the secret content being
//! compared, only on its length (and even length is not secret for any
//! caller in this crate — every comparison here is between equal-length
//! buffers by construction).

use zeroize::Zeroize;

/// Constant-time equality for a single field element.
pub fn ct_eq(a: u32, b: u32) -> bool {
    (a ^ b) == 0
}

/// Constant-time equality for two byte slices, without a length-dependent
/// early exit. Used for the BIP39 checksum comparison.
pub fn ct_eq_bytes(a: &[u8], b: &[u8]) -> bool {
    let mut diff = (a.len() as u32) ^ (b.len() as u32);
    let max_len = a.len().max(b.len());
    for i in 0..max_len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= (x ^ y) as u32;
    }
    diff == 0
}

/// Overwrites a buffer of field elements with zero via `zeroize`, which uses
/// a volatile write internally so the optimiser cannot elide it.
pub fn zeroise(slice: &mut [u32]) {
    slice.zeroize();
}
