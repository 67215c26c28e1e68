//! Block key generation.

use crate::constants::BLOCK_KEY_LEN;
use rand::Rng;
use std::collections::HashSet;

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random base-36 block key.
pub fn generate_block_key() -> String {
    let mut rng = rand::thread_rng();
    (0..BLOCK_KEY_LEN)
        .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}

/// Generate a block key not present in `taken`, and record it there.
pub(crate) fn unique_block_key(taken: &mut HashSet<String>) -> String {
    loop {
        let key = generate_block_key();
        if taken.insert(key.clone()) {
            return key;
        }
    }
}
