//! Access token generation for the pseudo-login endpoint.
//!
//! Tokens are opaque 6-character strings over `[A-Z0-9]`. They are not
//! stored anywhere, so nothing can validate them later.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of characters in a generated access token.
pub const ACCESS_TOKEN_LENGTH: usize = 6;

/// Symbols a token is drawn from: uppercase ASCII letters then digits.
pub const ACCESS_TOKEN_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Draw a fresh access token from `rng`, each position uniform over
/// [`ACCESS_TOKEN_ALPHABET`].
pub fn generate_access_token<R: Rng>(rng: &mut R) -> String {
    (0..ACCESS_TOKEN_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..ACCESS_TOKEN_ALPHABET.len());
            char::from(ACCESS_TOKEN_ALPHABET[index])
        })
        .collect()
}

/// Source of access tokens injected into the API state.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> String;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngTokenSource;

impl TokenSource for ThreadRngTokenSource {
    fn access_token(&self) -> String {
        generate_access_token(&mut rand::rng())
    }
}

/// Deterministic source: the same seed yields the same token sequence.
#[derive(Debug)]
pub struct SeededTokenSource {
    rng: Mutex<StdRng>,
}

impl SeededTokenSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TokenSource for SeededTokenSource {
    fn access_token(&self) -> String {
        // Poisoning leaves the RNG state intact.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        generate_access_token(&mut *rng)
    }
}
