//! Reconstructs a mnemonic from `k` or more shares. Never returns `Err`:
//! every failure mode is recorded as a field of [`RecoveryErrors`] so a
//! caller reconstructing by hand sees every problem at once, not just the
//! first one the routine happened to hit.

use zeroize::Zeroize;

use crate::bip39;
use crate::checksum;
use crate::constant_time::ct_eq;
use crate::lagrange;
use crate::share::Share;
use crate::validation;

/// Outcome of a recovery attempt. Callers inspect `success` first; on
/// failure they inspect `errors` to diagnose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecoveryResult {
    pub mnemonic: Option<String>,
    pub success: bool,
    pub errors: RecoveryErrors,
}

/// Every way recovery can fail, recorded rather than raised. `row` and
/// `row_path_mismatch` (likewise `global`/`global_path_mismatch`) carry the
/// same information in two buckets: the human-facing recovery report and the
/// machine-facing path-fault report grew up separately and this crate keeps
/// both rather than picking one and breaking the other's consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecoveryErrors {
    pub row: Vec<usize>,
    pub global: bool,
    pub bip39: bool,
    pub generic: Option<String>,
    pub row_path_mismatch: Vec<usize>,
    pub global_path_mismatch: bool,
}

struct RecoverWorkspace {
    recovered_ids: Vec<u32>,
    recovered_row: Vec<u32>,
    recovered_global: u32,
}

impl Drop for RecoverWorkspace {
    fn drop(&mut self) {
        self.recovered_ids.zeroize();
        self.recovered_row.zeroize();
        self.recovered_global.zeroize();
    }
}

/// Reconstructs a `word_count`-word mnemonic from `shares`. Runs BIP39
/// validation on the recovered mnemonic unless `strict_validation` is
/// `false` — set it `false` only to inspect a partially-consistent recovery
/// for diagnostic purposes, never for production secret reconstruction.
pub fn recover(shares: &[Share], word_count: u8, strict_validation: bool) -> RecoveryResult {
    let word_count = word_count as usize;
    let mut result = RecoveryResult::default();

    if let Err(message) = validation::validate_share_set(shares, word_count) {
        result.errors.generic = Some(message);
        return result;
    }

    let row_count = word_count / 3;
    let recovered_ids: Vec<u32> = (0..word_count)
        .map(|i| {
            let points: Vec<(u32, u32)> =
                shares.iter().map(|s| (s.share_number, s.word_shares[i])).collect();
            lagrange::interpolate_at_zero(&points)
                .expect("structural validation already rejected <2 shares, x=0, and duplicates")
        })
        .collect();

    let recovered_row: Vec<u32> = (0..row_count)
        .map(|r| {
            let points: Vec<(u32, u32)> =
                shares.iter().map(|s| (s.share_number, s.checksum_shares[r])).collect();
            lagrange::interpolate_at_zero(&points)
                .expect("structural validation already rejected <2 shares, x=0, and duplicates")
        })
        .collect();

    let global_points: Vec<(u32, u32)> = shares
        .iter()
        .map(|s| (s.share_number, s.global_integrity_check_share))
        .collect();
    let recovered_global = lagrange::interpolate_at_zero(&global_points)
        .expect("structural validation already rejected <2 shares, x=0, and duplicates");

    let mut workspace = RecoverWorkspace { recovered_ids, recovered_row, recovered_global };

    let path_a_row = checksum::compute_row_checks(&workspace.recovered_ids);
    let path_a_global = checksum::compute_global_integrity_check(&workspace.recovered_ids);

    for r in 0..row_count {
        if !ct_eq(workspace.recovered_row[r], path_a_row[r]) {
            result.errors.row.push(r);
            result.errors.row_path_mismatch.push(r);
        }
    }
    if !ct_eq(workspace.recovered_global, path_a_global) {
        result.errors.global = true;
        result.errors.global_path_mismatch = true;
    }

    if !result.errors.row.is_empty() || result.errors.global {
        log::warn!(
            "recover: path mismatch on {} row(s), global={}",
            result.errors.row.len(),
            result.errors.global
        );
        return result;
    }

    if workspace.recovered_ids.iter().any(|&id| !bip39::is_bip39_id(id)) {
        result.errors.generic = Some("recovered word is outside BIP39 range".to_string());
        return result;
    }

    let mnemonic = workspace
        .recovered_ids
        .iter()
        .map(|&id| bip39::id_to_word(id))
        .collect::<Vec<_>>()
        .join(" ");

    if strict_validation && bip39::validate_mnemonic(&mnemonic).is_err() {
        result.errors.bip39 = true;
    }

    result.success = result.errors.row.is_empty()
        && !result.errors.global
        && !result.errors.bip39
        && result.errors.generic.is_none();
    result.mnemonic = Some(mnemonic);

    log::debug!("recover: success={} word_count={word_count}", result.success);
    result
}
