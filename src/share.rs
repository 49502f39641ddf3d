//! The `Share` record: a point on each word's polynomial, plus the per-row
//! and global checksum points, tagged with a share number.

use serde::{Deserialize, Serialize};

/// A single share produced by [`crate::split::split`]. Plain data, no hidden
/// invariants beyond field-range and length checks enforced wherever a
/// `Share` is accepted from outside this crate (construction here, or
/// deserialisation at the caller's boundary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub share_number: u32,
    pub word_shares: Vec<u32>,
    pub checksum_shares: Vec<u32>,
    pub global_integrity_check_share: u32,
}
