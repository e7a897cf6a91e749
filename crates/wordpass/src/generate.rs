//! Random passphrase generation.

use rand::RngCore;
use zeroize::Zeroize;

use crate::codec::bytes_to_passphrase;
use crate::{PassphraseError, MAX_PASSPHRASE_ENTROPY_BYTES, MIN_PASSPHRASE_ENTROPY_BYTES};

/// Generate a passphrase from `byte_len` bytes of OS randomness.
///
/// `byte_len` must be even and within `[2, 1024]`; the result has
/// `byte_len / 2` words. The scratch entropy buffer is zeroized once the
/// words have been rendered.
pub fn generate_passphrase(byte_len: usize) -> Result<Vec<&'static str>, PassphraseError> {
    if byte_len < MIN_PASSPHRASE_ENTROPY_BYTES
        || byte_len > MAX_PASSPHRASE_ENTROPY_BYTES
        || byte_len % 2 != 0
    {
        return Err(PassphraseError::InvalidByteLength);
    }

    let mut entropy = vec![0u8; byte_len];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let words = bytes_to_passphrase(&entropy);
    entropy.zeroize();
    Ok(words)
}

/// [`generate_passphrase`], space-joined into a single string.
pub fn generate_passphrase_string(byte_len: usize) -> Result<String, PassphraseError> {
    Ok(generate_passphrase(byte_len)?.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::words_to_bytes;

    #[test]
    fn test_word_counts() {
        assert_eq!(generate_passphrase(2).unwrap().len(), 1);
        assert_eq!(generate_passphrase(20).unwrap().len(), 10);
        assert_eq!(generate_passphrase(512).unwrap().len(), 256);
        assert_eq!(generate_passphrase(1024).unwrap().len(), 512);
    }

    #[test]
    fn test_rejects_odd_lengths() {
        assert_eq!(
            generate_passphrase(1),
            Err(PassphraseError::InvalidByteLength)
        );
        assert_eq!(
            generate_passphrase(23),
            Err(PassphraseError::InvalidByteLength)
        );
    }

    #[test]
    fn test_rejects_out_of_range_lengths() {
        assert_eq!(
            generate_passphrase(0),
            Err(PassphraseError::InvalidByteLength)
        );
        assert_eq!(
            generate_passphrase(1026),
            Err(PassphraseError::InvalidByteLength)
        );
        assert_eq!(
            generate_passphrase(1).unwrap_err().to_string(),
            "byte_len must be an even number between 2 and 1024"
        );
    }

    #[test]
    fn test_generated_passphrase_decodes() {
        let words = generate_passphrase(64).unwrap();
        let bytes = words_to_bytes(&words).unwrap();
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_string_form_round_trips() {
        let phrase = generate_passphrase_string(16).unwrap();
        let bytes = crate::codec::passphrase_to_bytes(&phrase).unwrap();
        assert_eq!(bytes.len(), 16);
    }
}
