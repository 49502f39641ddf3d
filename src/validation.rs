//! Structural validation of a share set, run before recover attempts any
//! arithmetic. Every violation here is a caller/transport bug (a corrupted
//! share, a mismatched word count), never a legitimate "not enough shares
//! yet" state — that distinction matters for error messages.

use crate::bip39;
use crate::share::Share;

/// Checks the structural preconditions recover relies on before it
/// interpolates anything. Returns a human-readable message on the first
/// violation found.
pub fn validate_share_set(shares: &[Share], word_count: usize) -> Result<(), String> {
    if word_count != 12 && word_count != 24 {
        return Err(format!("unsupported word count: {word_count}"));
    }
    if word_count % 3 != 0 {
        return Err(format!("word count must be divisible by 3: {word_count}"));
    }
    if shares.len() < 2 {
        return Err(format!("need at least 2 shares, got {}", shares.len()));
    }

    let mut seen_numbers = std::collections::HashSet::with_capacity(shares.len());
    for share in shares {
        if !bip39::is_valid_share_id(share.share_number) || share.share_number == 0 {
            return Err(format!("share number out of range: {}", share.share_number));
        }
        if !seen_numbers.insert(share.share_number) {
            return Err("Duplicate share numbers".to_string());
        }
        if share.word_shares.len() != word_count {
            return Err(format!(
                "share {} has {} word shares, expected {word_count}",
                share.share_number,
                share.word_shares.len()
            ));
        }
        if share.checksum_shares.len() != word_count / 3 {
            return Err(format!(
                "share {} has {} checksum shares, expected {}",
                share.share_number,
                share.checksum_shares.len(),
                word_count / 3
            ));
        }
        for &v in share
            .word_shares
            .iter()
            .chain(share.checksum_shares.iter())
            .chain(std::iter::once(&share.global_integrity_check_share))
        {
            if !bip39::is_valid_share_id(v) {
                return Err(format!("field element out of range [0, 2052]: {v}"));
            }
        }
    }

    Ok(())
}
