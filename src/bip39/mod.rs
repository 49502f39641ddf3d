//! A native BIP39 module: embedded wordlist, bidirectional word/ID maps,
//! checksum validation, and mnemonic generation.
//!
//! IDs are kept 1-based everywhere outside this module's bit-packing core —
//! earlier iterations of this scheme performed ad hoc `+-1` conversions at
//! every boundary and introduced off-by-one bugs that silently broke
//! cross-implementation test vectors. The single 0-based subtraction happens
//! only where BIP39's bit-packing format demands it.

mod wordlist;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::constant_time::ct_eq_bytes;
use crate::rng::{self, RngError, SecureRng};

pub use wordlist::WORD_COUNT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bip39Error {
    #[error("word not found in the BIP39 English wordlist: {0:?}")]
    UnknownWord(String),
    #[error("mnemonic must have 12, 15, 18, 21, or 24 words, found {0}")]
    InvalidWordCount(usize),
    #[error("BIP39 checksum does not match the entropy")]
    ChecksumFailure,
    #[error("random entropy source failed: {0}")]
    NoEntropy(#[from] RngError),
}

const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Looks up the 1-based BIP39 ID for a normalised (lowercase, trimmed) word.
pub fn word_to_id(word: &str) -> Result<u32, Bip39Error> {
    let normalised = word.trim().to_lowercase();
    wordlist::WORD_TO_ID
        .get(&normalised)
        .copied()
        .ok_or(Bip39Error::UnknownWord(normalised))
}

/// Looks up the canonical word for `id ∈ [1, 2048]`. For the sentinel range
/// `{0, 2049..2052}` returns a zero-padded decimal string for display
/// purposes only — these values never appear inside a real mnemonic.
pub fn id_to_word(id: u32) -> String {
    if is_bip39_id(id) {
        wordlist::WORDS[(id - 1) as usize].clone()
    } else {
        format!("{:04}", id)
    }
}

pub fn is_bip39_id(v: u32) -> bool {
    (1..=WORD_COUNT as u32).contains(&v)
}

pub fn is_valid_share_id(v: u32) -> bool {
    v == 0 || (1..=2052).contains(&v)
}

/// Validates a space-separated mnemonic: word count, wordlist membership,
/// and the BIP39 checksum.
pub fn validate_mnemonic(mnemonic: &str) -> Result<(), Bip39Error> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if !VALID_WORD_COUNTS.contains(&words.len()) {
        return Err(Bip39Error::InvalidWordCount(words.len()));
    }

    let mut ids0 = Vec::with_capacity(words.len());
    for w in &words {
        ids0.push(word_to_id(w)? - 1);
    }

    let word_count = words.len();
    let checksum_bits = word_count / 3;
    let full_bits = ids_to_bits(&ids0);
    let entropy_bits_len = full_bits.len() - checksum_bits;
    let entropy_bits = &full_bits[..entropy_bits_len];
    let mnemonic_checksum_bits = &full_bits[entropy_bits_len..];

    let entropy_bytes = bits_to_bytes(entropy_bits);
    let hash = Sha256::digest(&entropy_bytes);
    let hash_checksum_bits = bytes_to_bits(&hash, checksum_bits);

    let mnemonic_checksum_bytes = bits_to_bytes(mnemonic_checksum_bits);
    let hash_checksum_bytes = bits_to_bytes(&hash_checksum_bits);

    if ct_eq_bytes(&mnemonic_checksum_bytes, &hash_checksum_bytes) {
        Ok(())
    } else {
        Err(Bip39Error::ChecksumFailure)
    }
}

/// Generates a fresh, valid mnemonic of `word_count` words (12, 15, 18, 21,
/// or 24) from the injected entropy source.
pub fn generate_mnemonic(word_count: usize, rng: &mut dyn SecureRng) -> Result<String, Bip39Error> {
    if !VALID_WORD_COUNTS.contains(&word_count) {
        return Err(Bip39Error::InvalidWordCount(word_count));
    }

    let checksum_bits = word_count / 3;
    let entropy_bits_len = word_count * 11 - checksum_bits;
    let entropy_bytes_len = entropy_bits_len / 8;

    let mut entropy = vec![0u8; entropy_bytes_len];
    for byte in entropy.iter_mut() {
        *byte = rng::get_random_int_inclusive(rng, 255)? as u8;
    }

    let hash = Sha256::digest(&entropy);
    let mut full_bits = bytes_to_bits(&entropy, entropy_bits_len);
    full_bits.extend(bytes_to_bits(&hash, checksum_bits));

    let ids0 = bits_to_ids(&full_bits);
    let words: Vec<String> = ids0.iter().map(|&id0| id_to_word(id0 + 1)).collect();
    Ok(words.join(" "))
}

fn ids_to_bits(ids0: &[u32]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(ids0.len() * 11);
    for &id in ids0 {
        for i in (0..11).rev() {
            bits.push((id >> i) & 1 == 1);
        }
    }
    bits
}

fn bits_to_ids(bits: &[bool]) -> Vec<u32> {
    bits.chunks(11)
        .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 1) | b as u32))
        .collect()
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8) << (8 - chunk.len()))
        .collect()
}

fn bytes_to_bits(bytes: &[u8], n: usize) -> Vec<bool> {
    let mut bits = Vec::with_capacity(n);
    'outer: for byte in bytes {
        for i in (0..8).rev() {
            if bits.len() == n {
                break 'outer;
            }
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CountingRng;

    #[test]
    fn word_to_id_and_back_round_trip() {
        assert_eq!(word_to_id("abandon").unwrap(), 1);
        assert_eq!(word_to_id("zoo").unwrap(), WORD_COUNT as u32);
        assert_eq!(id_to_word(1), "abandon");
        assert_eq!(id_to_word(WORD_COUNT as u32), "zoo");
    }

    #[test]
    fn word_to_id_normalises_case_and_whitespace() {
        assert_eq!(word_to_id("  Abandon  ").unwrap(), 1);
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert_eq!(
            word_to_id("notaword"),
            Err(Bip39Error::UnknownWord("notaword".to_string()))
        );
    }

    #[test]
    fn sentinel_ids_render_as_zero_padded_strings() {
        assert_eq!(id_to_word(0), "0000");
        assert_eq!(id_to_word(2049), "2049");
        assert_eq!(id_to_word(2052), "2052");
    }

    #[test]
    fn is_bip39_id_and_is_valid_share_id_ranges() {
        assert!(is_bip39_id(1));
        assert!(is_bip39_id(2048));
        assert!(!is_bip39_id(0));
        assert!(!is_bip39_id(2049));

        assert!(is_valid_share_id(0));
        assert!(is_valid_share_id(2052));
        assert!(!is_valid_share_id(2053));
    }

    #[test]
    fn generated_mnemonics_validate_for_every_supported_length() {
        for &word_count in &VALID_WORD_COUNTS {
            let mut rng = CountingRng::new(word_count as u32 + 1);
            let mnemonic = generate_mnemonic(word_count, &mut rng).unwrap();
            assert_eq!(mnemonic.split_whitespace().count(), word_count);
            assert!(validate_mnemonic(&mnemonic).is_ok(), "generated mnemonic failed validation: {mnemonic}");
        }
    }

    #[test]
    fn corrupted_mnemonic_fails_checksum() {
        let mut rng = CountingRng::new(99);
        let mnemonic = generate_mnemonic(12, &mut rng).unwrap();
        let mut words: Vec<&str> = mnemonic.split_whitespace().collect();
        // Swap the first two words; word-count and membership stay valid,
        // but the checksum almost certainly will not.
        words.swap(0, 1);
        let corrupted = words.join(" ");
        if corrupted != mnemonic {
            assert_eq!(validate_mnemonic(&corrupted), Err(Bip39Error::ChecksumFailure));
        }
    }

    #[test]
    fn rejects_unsupported_word_counts() {
        assert_eq!(
            validate_mnemonic("abandon abandon"),
            Err(Bip39Error::InvalidWordCount(2))
        );
        let mut rng = CountingRng::new(1);
        assert_eq!(
            generate_mnemonic(13, &mut rng),
            Err(Bip39Error::InvalidWordCount(13))
        );
    }

    #[test]
    fn bit_packing_round_trips_ids() {
        let ids0 = [0u32, 2047, 1, 1024, 5];
        let bits = ids_to_bits(&ids0);
        let back = bits_to_ids(&bits);
        assert_eq!(ids0.to_vec(), back);
    }
}
