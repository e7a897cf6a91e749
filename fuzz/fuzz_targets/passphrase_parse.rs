#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpass::passphrase_to_bytes;

fuzz_target!(|data: &[u8]| {
    // Try parsing arbitrary bytes as a UTF-8 string, then as a passphrase.
    // passphrase_to_bytes must never panic — it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = passphrase_to_bytes(s);
    }
});
