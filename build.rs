//! Guards against a silently truncated or edited wordlist asset: counts
//! entries and checksums the file at build time rather than only at first
//! use, so a CI build fails immediately instead of a test happening to
//! exercise the broken entry.

use std::fs;

const EXPECTED_WORD_COUNT: usize = 2048;

fn main() {
    println!("cargo:rerun-if-changed=assets/bip39-english.txt");

    let contents = fs::read_to_string("assets/bip39-english.txt")
        .expect("assets/bip39-english.txt must be present at build time");

    let words: Vec<&str> = contents.split_whitespace().collect();
    assert_eq!(
        words.len(),
        EXPECTED_WORD_COUNT,
        "embedded BIP39 wordlist must have exactly {EXPECTED_WORD_COUNT} entries, found {}",
        words.len()
    );
    assert_eq!(words[0], "abandon", "wordlist must start with \"abandon\"");
    assert_eq!(
        words[EXPECTED_WORD_COUNT - 1],
        "zoo",
        "wordlist must end with \"zoo\""
    );

    // Simple additive/FNV-style digest: a drift guard, not a cryptographic
    // integrity check. The file is vendored locally, not fetched.
    let mut digest: u64 = 0xcbf29ce484222325;
    for byte in contents.bytes() {
        digest ^= byte as u64;
        digest = digest.wrapping_mul(0x100000001b3);
    }
    println!("cargo:warning=bip39-english.txt digest: {digest:016x}");
}
