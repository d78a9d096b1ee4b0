//! Random seeds for stream account addresses.

use crate::pubkey::MAX_SEED_LEN;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Number of random characters appended to the seed prefix.
const SEED_ENTROPY_LEN: usize = 20;

/// Build a fresh seed: `prefix` followed by random alphanumerics.
///
/// The result never exceeds `MAX_SEED_LEN`; a long prefix is truncated so
/// the random part always survives.
pub fn generate_seed(prefix: &str) -> String {
    generate_seed_with(&mut rand::thread_rng(), prefix)
}

pub(crate) fn generate_seed_with<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let max_prefix = MAX_SEED_LEN - SEED_ENTROPY_LEN;
    let prefix: String = prefix.chars().filter(char::is_ascii).take(max_prefix).collect();

    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(SEED_ENTROPY_LEN)
        .map(char::from)
        .collect();

    format!("{}{}", prefix, suffix)
}
