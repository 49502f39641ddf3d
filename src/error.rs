//! The fatal error taxonomy surfaced by [`crate::split::split`]. Recover
//! never returns an error of its own; every condition that could arise there
//! is instead recorded as a field of [`crate::recover::RecoveryErrors`].

use thiserror::Error;

use crate::bip39::Bip39Error;
use crate::rng::RngError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("mnemonic failed BIP39 validation: {0}")]
    InvalidMnemonic(#[from] Bip39Error),

    #[error(
        "row {row} path mismatch at share number {share_number}: direct sum {a} != polynomial sum {b}"
    )]
    RowPathMismatch { share_number: u32, row: usize, a: u32, b: u32 },

    #[error("global path mismatch at share number {share_number}: direct sum {a} != polynomial sum {b}")]
    GlobalPathMismatch { share_number: u32, a: u32, b: u32 },

    #[error("no entropy available: {0}")]
    NoEntropy(#[from] RngError),
}
