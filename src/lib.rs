//! GF(2053) Shamir secret sharing for BIP39 mnemonics, with dual-path
//! checksum validation and a Global Integrity Check. See `split` and
//! `recover` for the two halves of the scheme.

pub mod bip39;
pub mod checksum;
pub mod constant_time;
pub mod error;
pub mod field;
pub mod lagrange;
pub mod polynomial;
pub mod recover;
pub mod rng;
pub mod share;
pub mod split;
pub mod validation;

pub use bip39::Bip39Error;
pub use error::SplitError;
pub use lagrange::{lagrange_multipliers, LagrangeError};
pub use recover::{recover, RecoveryErrors, RecoveryResult};
pub use rng::{OsRng, RngError, SecureRng};
pub use share::Share;
pub use split::split;
