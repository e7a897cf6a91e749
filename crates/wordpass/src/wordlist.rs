//! The 65,536-entry wordlist and index lookup.
//!
//! The list ships as a newline-delimited asset embedded at compile time. It is
//! a pre-validated constant: strictly sorted, pairwise unique, lowercase ASCII,
//! every word 1–32 characters. Word `i` is the canonical rendering of the
//! 16-bit index `i`, so every index is a valid position by construction.

use std::sync::LazyLock;

/// Number of entries in the wordlist (one per 16-bit index)
pub const WORDLIST_SIZE: usize = 65536;

static RAW: &str = include_str!("wordlist.txt");

static WORDLIST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let words: Vec<&'static str> = RAW.lines().collect();
    debug_assert_eq!(words.len(), WORDLIST_SIZE);
    words
});

/// The full wordlist in index order.
pub fn wordlist() -> &'static [&'static str] {
    &WORDLIST
}

/// Word at the given 16-bit index. Infallible: the list covers every index.
pub fn index_to_word(index: u16) -> &'static str {
    WORDLIST[index as usize]
}

/// Binary search for a word's index, case-insensitively.
///
/// Returns `None` for words not in the list. Callers are expected to have
/// rejected words outside `[A-Za-z]{1,32}` before calling.
pub fn word_to_index(word: &str) -> Option<u16> {
    let lower = word.to_ascii_lowercase();
    WORDLIST
        .binary_search_by(|probe| str::cmp(probe, &lower))
        .ok()
        .map(|i| i as u16)
}
