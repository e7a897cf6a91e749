//! Encoder and decoder.
//!
//! Encoding maps every big-endian byte pair to one wordlist entry. Decoding
//! runs the validation pipeline first and only then reconstructs bytes, so a
//! failing call never returns partial output.

use crate::padding::{pad, unpad};
use crate::wordlist::{index_to_word, word_to_index};
use crate::{PassphraseError, MAX_PASSPHRASE_WORDS};

/// Convert bytes to a passphrase, one word per byte pair.
///
/// Odd-length input is padded (see [`crate::padding`]) so any slice encodes.
/// Empty input yields an empty passphrase.
pub fn bytes_to_passphrase(bytes: &[u8]) -> Vec<&'static str> {
    let padded = pad(bytes);
    padded
        .chunks_exact(2)
        .map(|pair| index_to_word(u16::from_be_bytes([pair[0], pair[1]])))
        .collect()
}

/// [`bytes_to_passphrase`], space-joined into a single string.
pub fn bytes_to_passphrase_string(bytes: &[u8]) -> String {
    bytes_to_passphrase(bytes).join(" ")
}

/// Convert a whitespace-delimited passphrase back to bytes.
///
/// Tokenization is forgiving: any whitespace run separates words and all other
/// characters outside `A-Z`/`a-z` are dropped, so pasted input with newlines,
/// tabs, or stray punctuation still decodes.
pub fn passphrase_to_bytes(passphrase: &str) -> Result<Vec<u8>, PassphraseError> {
    let cleaned: String = passphrase
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    words_to_bytes(&words)
}

/// Convert a slice of passphrase words back to bytes.
///
/// Validation order: non-empty, word shape (`[A-Za-z]{1,32}`), word count
/// (≤ 512), then per-word lookup. Lookup is case-insensitive; an unknown word
/// is reported with its original casing. The reconstructed buffer is unpadded
/// before it is returned.
pub fn words_to_bytes<S: AsRef<str>>(words: &[S]) -> Result<Vec<u8>, PassphraseError> {
    if words.is_empty() {
        return Err(PassphraseError::Empty);
    }
    if !words.iter().all(|w| is_well_formed(w.as_ref())) {
        return Err(PassphraseError::MalformedWord);
    }
    if words.len() > MAX_PASSPHRASE_WORDS {
        return Err(PassphraseError::TooManyWords);
    }

    let mut bytes = Vec::with_capacity(words.len() * 2);
    for word in words {
        let word = word.as_ref();
        let index =
            word_to_index(word).ok_or_else(|| PassphraseError::UnknownWord(word.to_string()))?;
        bytes.extend_from_slice(&index.to_be_bytes());
    }

    Ok(unpad(bytes))
}

fn is_well_formed(word: &str) -> bool {
    !word.is_empty() && word.len() <= 32 && word.bytes().all(|b| b.is_ascii_alphabetic())
}
