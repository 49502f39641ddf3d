use schiavinato::{recover, split, OsRng};

fn main() {
    let mnemonic = "abandon abandon abandon abandon abandon abandon \
                    abandon abandon abandon abandon abandon about";

    let threshold = 3;
    let total_shares = 5;
    let mut rng = OsRng::new();

    let shares = split(mnemonic, threshold, total_shares, &mut rng)
        .expect("split should succeed for a valid mnemonic");

    println!("Schiavinato split ({threshold}-of-{total_shares}):");
    for share in &shares {
        println!(
            "  share {}: word_shares={:?} checksum_shares={:?} gic={}",
            share.share_number, share.word_shares, share.checksum_shares, share.global_integrity_check_share
        );
    }

    let subset = &shares[..threshold as usize];
    let result = recover(subset, 12, true);

    println!("\nRecovered from {threshold} shares:");
    println!("  success: {}", result.success);
    println!("  mnemonic: {:?}", result.mnemonic);
    assert_eq!(result.mnemonic.as_deref(), Some(mnemonic));

    let lagrange_shares: Vec<u32> = subset.iter().map(|s| s.share_number).collect();
    let gammas = schiavinato::lagrange_multipliers(&lagrange_shares)
        .expect("threshold-many distinct, nonzero share numbers");
    println!("\nLagrange multipliers for manual reconstruction at x={lagrange_shares:?}: {gammas:?}");
}
