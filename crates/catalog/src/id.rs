//! Movie id generation.
//!
//! Ids are short random tokens of lowercase base-36 digits, e.g. `k3x9q0z7m`.
//! Randomness alone does not guarantee uniqueness; the catalog checks each
//! token against every id it has issued and draws again on a collision.

use crate::types::MovieId;
use rand::Rng;

/// Number of characters in a generated id
pub const ID_LENGTH: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draw a fresh random id from `rng`
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> MovieId {
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
