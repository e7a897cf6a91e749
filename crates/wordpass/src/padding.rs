//! Odd-length padding.
//!
//! The byte-pair encoding only covers even lengths, so odd-length inputs get a
//! fixed 5-byte marker appended before encoding. Appending 5 bytes flips the
//! parity, and the decoder strips the marker whenever the decoded buffer ends
//! with it.
//!
//! Known limitation: even-length data that genuinely ends with the marker
//! bytes is indistinguishable from a padded buffer and loses its tail on
//! decode. The marker was chosen to make an accidental collision unlikely, not
//! impossible.

use std::borrow::Cow;

/// Sentinel appended to odd-length buffers before encoding.
///
/// The trailing four marker bytes encode as the words `pad safely`, so padded
/// passphrases are recognizable at a glance.
pub const PAD_MARKER: [u8; 5] = [0xc8, 0x9c, 0x00, 0xb8, 0x00];

/// Append [`PAD_MARKER`] iff the buffer has odd length.
///
/// Even buffers are borrowed unchanged; odd buffers are copied once.
pub fn pad(bytes: &[u8]) -> Cow<'_, [u8]> {
    if bytes.len() % 2 == 0 {
        Cow::Borrowed(bytes)
    } else {
        let mut padded = Vec::with_capacity(bytes.len() + PAD_MARKER.len());
        padded.extend_from_slice(bytes);
        padded.extend_from_slice(&PAD_MARKER);
        Cow::Owned(padded)
    }
}

/// Strip a trailing [`PAD_MARKER`] if present.
///
/// Decoded buffers are always even-length (two bytes per word), so presence of
/// the marker is the only signal needed; no parity check.
pub fn unpad(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.ends_with(&PAD_MARKER) {
        bytes.truncate(bytes.len() - PAD_MARKER.len());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_even_input_is_borrowed() {
        let data = [1u8, 2, 3, 4];
        assert!(matches!(pad(&data), Cow::Borrowed(_)));
        assert_eq!(pad(&data).as_ref(), &data);
        assert!(matches!(pad(&[]), Cow::Borrowed(_)));
    }

    #[test]
    fn test_odd_input_gets_marker() {
        let padded = pad(&[0xab]);
        assert_eq!(padded.len(), 6);
        assert_eq!(padded[0], 0xab);
        assert!(padded.ends_with(&PAD_MARKER));
    }

    #[test]
    fn test_unpad_strips_marker() {
        let mut buf = vec![1u8, 2, 3];
        buf.extend_from_slice(&PAD_MARKER);
        assert_eq!(unpad(buf), vec![1, 2, 3]);
    }

    #[test]
    fn test_unpad_leaves_unmarked_data() {
        assert_eq!(unpad(vec![1, 2, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(unpad(vec![]), Vec::<u8>::new());
        // marker bytes anywhere but the tail are plain data
        let mut buf = PAD_MARKER.to_vec();
        buf.push(0xff);
        assert_eq!(unpad(buf.clone()), buf);
    }

    #[test]
    fn test_pad_unpad_round_trip() {
        for len in 0..=11usize {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data).into_owned();
            assert_eq!(padded.len() % 2, 0, "padded length must be even");
            assert_eq!(unpad(padded), data, "length {len}");
        }
    }
}
