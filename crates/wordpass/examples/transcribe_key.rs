//! Render a fresh 128-bit key as a passphrase and recover it.
//! Run with: cargo run --example transcribe_key

use wordpass::{generate_passphrase_string, passphrase_to_bytes};

fn main() {
    let phrase = generate_passphrase_string(16).unwrap();
    println!("=== NEW KEY ===\n");
    println!("Write down or read aloud:\n");
    println!("{}\n", phrase);

    let bytes = passphrase_to_bytes(&phrase).unwrap();
    println!("Recovered {} bytes: {}", bytes.len(), hex(&bytes));
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
