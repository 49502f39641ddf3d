//! Integration tests for the full split/recover round trip, run against
//! mnemonics produced by this crate's own BIP39 generator rather than
//! hard-coded external test vectors.

use schiavinato::bip39;
use schiavinato::rng::SecureRng;
use schiavinato::{recover, split, RngError};

/// Deterministic test-only entropy source (LCG), never used in production.
struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    fn new(seed: u32) -> Self {
        DeterministicRng { state: seed }
    }
}

impl SecureRng for DeterministicRng {
    fn fill(&mut self, buf: &mut [u32]) -> Result<(), RngError> {
        for word in buf.iter_mut() {
            *word = self.state;
            self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        }
        Ok(())
    }
}

#[test]
fn every_threshold_subset_reconstructs_a_12_word_mnemonic() {
    let _ = env_logger::try_init();
    let mut rng = DeterministicRng::new(1);
    let mnemonic = bip39::generate_mnemonic(12, &mut rng).unwrap();

    let (k, n) = (3, 5);
    let shares = split(&mnemonic, k, n, &mut rng).unwrap();
    assert_eq!(shares.len(), n as usize);

    for combo in combinations(&shares, k as usize) {
        let result = recover(&combo, 12, true);
        assert!(result.success, "subset {:?} failed: {:?}", indices(&combo), result.errors);
        assert_eq!(result.mnemonic.as_deref(), Some(mnemonic.as_str()));
    }
}

#[test]
fn every_threshold_subset_reconstructs_a_24_word_mnemonic() {
    let mut rng = DeterministicRng::new(2);
    let mnemonic = bip39::generate_mnemonic(24, &mut rng).unwrap();

    let (k, n) = (2, 4);
    let shares = split(&mnemonic, k, n, &mut rng).unwrap();

    for combo in combinations(&shares, k as usize) {
        let result = recover(&combo, 24, true);
        assert!(result.success, "subset {:?} failed: {:?}", indices(&combo), result.errors);
        assert_eq!(result.mnemonic.as_deref(), Some(mnemonic.as_str()));
    }
}

#[test]
fn overdetermined_share_set_still_reconstructs() {
    let mut rng = DeterministicRng::new(3);
    let mnemonic = bip39::generate_mnemonic(12, &mut rng).unwrap();

    let shares = split(&mnemonic, 2, 6, &mut rng).unwrap();
    let result = recover(&shares, 12, true);
    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.mnemonic.as_deref(), Some(mnemonic.as_str()));
}

#[test]
fn fewer_than_threshold_shares_do_not_reliably_reconstruct() {
    let mut rng = DeterministicRng::new(4);
    let mnemonic = bip39::generate_mnemonic(12, &mut rng).unwrap();

    let shares = split(&mnemonic, 4, 6, &mut rng).unwrap();
    let subset = &shares[..3];
    let result = recover(subset, 12, true);

    if result.success {
        panic!("recovery from fewer than k shares unexpectedly succeeded");
    }
    if let Some(recovered) = &result.mnemonic {
        assert_ne!(recovered, &mnemonic);
    }
}

#[test]
fn tampering_with_one_share_is_detected() {
    let mut rng = DeterministicRng::new(5);
    let mnemonic = bip39::generate_mnemonic(12, &mut rng).unwrap();

    let shares = split(&mnemonic, 3, 5, &mut rng).unwrap();
    let mut tampered = shares[0].clone();
    tampered.word_shares[0] = schiavinato::field::add(tampered.word_shares[0], 1);

    let subset = [tampered, shares[2].clone(), shares[3].clone()];
    let result = recover(&subset, 12, true);
    assert!(!result.success);
    assert!(
        !result.errors.row.is_empty()
            || result.errors.global
            || result.errors.bip39
            || result.errors.generic.is_some()
    );
}

#[test]
fn duplicate_share_numbers_are_rejected() {
    let mut rng = DeterministicRng::new(6);
    let mnemonic = bip39::generate_mnemonic(12, &mut rng).unwrap();

    let shares = split(&mnemonic, 2, 3, &mut rng).unwrap();
    let mut duplicate = shares[1].clone();
    duplicate.share_number = shares[0].share_number;

    let result = recover(&[shares[0].clone(), duplicate], 12, true);
    assert!(!result.success);
    let message = result.errors.generic.expect("duplicate share numbers should be rejected");
    assert!(message.contains("Duplicate share numbers"));
}

fn indices(shares: &[schiavinato::Share]) -> Vec<u32> {
    shares.iter().map(|s| s.share_number).collect()
}

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    for i in 0..=items.len() - k {
        let first = items[i].clone();
        for mut rest in combinations(&items[i + 1..], k - 1) {
            rest.insert(0, first.clone());
            out.push(rest);
        }
    }
    out
}
