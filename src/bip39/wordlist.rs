//! The embedded BIP39 English wordlist and its bidirectional word/ID maps.
//!
//! Vendored literally from `assets/bip39-english.txt` via `include_str!` and
//! parsed once into static maps, the same `lazy_static`-over-`include_str!`
//! idiom used for embedding fixed wordlists elsewhere in the secret-sharing
//! ecosystem this crate draws on.

use std::collections::HashMap;

use lazy_static::lazy_static;

const RAW_WORDLIST: &str = include_str!("../../assets/bip39-english.txt");

pub const WORD_COUNT: usize = 2048;

lazy_static! {
    pub static ref WORDS: Vec<String> = {
        let words: Vec<String> = RAW_WORDLIST.split_whitespace().map(str::to_owned).collect();
        debug_assert_eq!(words.len(), WORD_COUNT, "embedded wordlist must have exactly 2048 entries");
        debug_assert_eq!(words.first().map(String::as_str), Some("abandon"));
        debug_assert_eq!(words.last().map(String::as_str), Some("zoo"));
        words
    };
    pub static ref WORD_TO_ID: HashMap<String, u32> = {
        WORDS.iter().enumerate().map(|(i, w)| (w.clone(), (i + 1) as u32)).collect()
    };
}
