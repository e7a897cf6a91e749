//! wordpass
//!
//! Deterministic, reversible codec between raw bytes and human-readable
//! passphrases drawn from a fixed 65,536-word sorted wordlist.
//!
//! # Encoding
//!
//! Every big-endian byte pair maps to one 16-bit word index:
//! - `[0x00, 0x00]` → `a` (index 0)
//! - `[0xff, 0xff]` → `zyzzyva` (index 65,535)
//!
//! Odd-length inputs are made even by appending a 5-byte pad marker before
//! encoding; the marker is stripped again on decode, so the codec is total
//! over all input lengths.
//!
//! # Example
//!
//! ```
//! use wordpass::{bytes_to_passphrase, passphrase_to_bytes};
//!
//! let words = bytes_to_passphrase(&[0x00, 0x00, 0x11, 0xd4]);
//! assert_eq!(words, vec!["a", "billet"]);
//!
//! let bytes = passphrase_to_bytes("a billet").unwrap();
//! assert_eq!(bytes, vec![0x00, 0x00, 0x11, 0xd4]);
//! ```
//!
//! # Security
//!
//! The generator draws from the operating system CSPRNG and wipes its scratch
//! buffer. The codec itself adds no checksum or error correction: a mistyped
//! word that happens to be in the wordlist decodes to different bytes.

pub mod codec;
pub mod generate;
pub mod padding;
pub mod wordlist;

pub use codec::{
    bytes_to_passphrase, bytes_to_passphrase_string, passphrase_to_bytes, words_to_bytes,
};
pub use generate::{generate_passphrase, generate_passphrase_string};
pub use wordlist::{index_to_word, word_to_index, wordlist, WORDLIST_SIZE};

use thiserror::Error;

/// Minimum entropy the generator will produce, in bytes
pub const MIN_PASSPHRASE_ENTROPY_BYTES: usize = 2;

/// Maximum entropy the codec handles, in bytes
pub const MAX_PASSPHRASE_ENTROPY_BYTES: usize = 1024;

/// Maximum number of words the decoder accepts (one word per byte pair)
pub const MAX_PASSPHRASE_WORDS: usize = MAX_PASSPHRASE_ENTROPY_BYTES / 2;

/// Validation failures surfaced by the decoder and generator.
///
/// Display strings are stable and asserted verbatim in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassphraseError {
    #[error("passphrase must have at least one word")]
    Empty,
    #[error(
        "passphrase words must contain only A-Z, case insensitive, and be no longer than 32 characters"
    )]
    MalformedWord,
    #[error("passphrase must be no longer than 512 words")]
    TooManyWords,
    #[error("passphrase has an invalid word: {0}")]
    UnknownWord(String),
    #[error("byte_len must be an even number between 2 and 1024")]
    InvalidByteLength,
}
