//! Splits a BIP39 mnemonic into `n` shares, any `k` of which reconstruct it.

use zeroize::Zeroize;

use crate::bip39;
use crate::checksum;
use crate::error::SplitError;
use crate::field;
use crate::polynomial::Polynomial;
use crate::rng::SecureRng;
use crate::share::Share;

/// Owns every buffer that carries word IDs or polynomial coefficients for
/// the duration of a `split` call. Its `Drop` impl zeroises everything,
/// which means the scrub runs on every exit path — success, a fatal
/// validation error via `?`, or an early return — without a hand-rolled
/// cleanup call at each return site.
struct SplitWorkspace {
    ids: Vec<u32>,
    word_polys: Vec<Polynomial>,
    row_polys: Vec<Polynomial>,
    global_poly: Polynomial,
}

impl Drop for SplitWorkspace {
    fn drop(&mut self) {
        self.ids.zeroize();
        for p in self.word_polys.iter_mut() {
            p.zeroize();
        }
        for p in self.row_polys.iter_mut() {
            p.zeroize();
        }
        self.global_poly.zeroize();
    }
}

fn sanitise(mnemonic: &str) -> String {
    mnemonic.trim().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Splits `mnemonic` into `n` shares with threshold `k`. Aborts on the first
/// fatal condition: bad arguments, an invalid mnemonic, exhausted entropy, or
/// a Path A/Path B disagreement (which would indicate the platform is
/// miscomputing, never a legitimate state).
pub fn split(
    mnemonic: &str,
    k: u32,
    n: u32,
    rng: &mut dyn SecureRng,
) -> Result<Vec<Share>, SplitError> {
    if k < 2 {
        return Err(SplitError::InvalidArguments("threshold k must be at least 2".to_string()));
    }
    if k > n {
        return Err(SplitError::InvalidArguments("threshold k must not exceed n".to_string()));
    }
    if n >= field::MODULUS {
        return Err(SplitError::InvalidArguments(format!("n must be less than {}", field::MODULUS)));
    }

    let sanitised = sanitise(mnemonic);
    bip39::validate_mnemonic(&sanitised)?;

    let words: Vec<&str> = sanitised.split_whitespace().collect();
    let word_count = words.len();
    if word_count != 12 && word_count != 24 {
        return Err(SplitError::InvalidArguments(format!(
            "split only supports 12- or 24-word mnemonics, got {word_count}"
        )));
    }

    let mut workspace = {
        let ids: Vec<u32> = words
            .iter()
            .map(|w| bip39::word_to_id(w))
            .collect::<Result<_, _>>()?;

        let degree = (k - 1) as usize;
        let word_polys: Vec<Polynomial> = ids
            .iter()
            .map(|&id| Polynomial::random(id, degree, rng))
            .collect::<Result<_, _>>()?;

        let row_polys = checksum::compute_row_check_polynomials(&word_polys)
            .expect("word polynomials share degree by construction");
        let global_poly = checksum::compute_global_integrity_check_polynomial(&word_polys)
            .expect("word polynomials share degree by construction");

        SplitWorkspace { ids, word_polys, row_polys, global_poly }
    };

    let mut shares = Vec::with_capacity(n as usize);
    for x in 1..=n {
        let word_shares: Vec<u32> = workspace.word_polys.iter().map(|p| p.evaluate(x)).collect();

        let mut checksum_shares = Vec::with_capacity(workspace.row_polys.len());
        for (row, row_poly) in workspace.row_polys.iter().enumerate() {
            let a = word_shares[row * 3..row * 3 + 3]
                .iter()
                .fold(0u32, |acc, &v| field::add(acc, v));
            let b = row_poly.evaluate(x);
            if a != b {
                return Err(SplitError::RowPathMismatch { share_number: x, row, a, b });
            }
            checksum_shares.push(a);
        }

        let global_a = word_shares.iter().fold(0u32, |acc, &v| field::add(acc, v));
        let global_b = workspace.global_poly.evaluate(x);
        if global_a != global_b {
            return Err(SplitError::GlobalPathMismatch { share_number: x, a: global_a, b: global_b });
        }

        shares.push(Share {
            share_number: x,
            word_shares,
            checksum_shares,
            global_integrity_check_share: global_a,
        });
    }

    workspace.ids.zeroize();
    log::debug!("split produced {n} shares with threshold {k} for a {word_count}-word mnemonic");
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CountingRng;

    #[test]
    fn rejects_threshold_below_two() {
        let mut rng = CountingRng::new(1);
        let err = split("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", 1, 3, &mut rng);
        assert!(matches!(err, Err(SplitError::InvalidArguments(_))));
    }

    #[test]
    fn rejects_threshold_above_n() {
        let mut rng = CountingRng::new(1);
        let err = split("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", 4, 3, &mut rng);
        assert!(matches!(err, Err(SplitError::InvalidArguments(_))));
    }

    #[test]
    fn rejects_invalid_mnemonic() {
        let mut rng = CountingRng::new(1);
        let err = split("not a valid bip39 mnemonic at all here twelve words long please", 2, 3, &mut rng);
        assert!(matches!(err, Err(SplitError::InvalidMnemonic(_))));
    }

    #[test]
    fn produces_n_shares_with_expected_shape() {
        let mut rng = CountingRng::new(5);
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let shares = split(mnemonic, 2, 4, &mut rng).unwrap();
        assert_eq!(shares.len(), 4);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.share_number, (i + 1) as u32);
            assert_eq!(share.word_shares.len(), 12);
            assert_eq!(share.checksum_shares.len(), 4);
        }
    }
}
