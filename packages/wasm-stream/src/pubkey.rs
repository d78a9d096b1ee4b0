//! Solana public key (address) helpers.
//!
//! Wraps `solana_sdk::pubkey::Pubkey` with stream-specific error handling and
//! the seed-based address derivation used for new stream accounts.

use crate::error::WasmStreamError;
use std::str::FromStr;

/// Re-export the underlying Solana Pubkey type.
pub use solana_sdk::pubkey::Pubkey;

/// Maximum length of a derived-address seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Extension trait for Pubkey to add stream-friendly error handling.
pub trait PubkeyExt {
    fn from_base58(address: &str) -> Result<Pubkey, WasmStreamError>;
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, WasmStreamError>;
    fn derive_with_seed(
        base: &Pubkey,
        seed: &str,
        owner: &Pubkey,
    ) -> Result<Pubkey, WasmStreamError>;
}

impl PubkeyExt for Pubkey {
    /// Create a Pubkey from a base58 string.
    fn from_base58(address: &str) -> Result<Pubkey, WasmStreamError> {
        Pubkey::from_str(address)
            .map_err(|e| WasmStreamError::InvalidInput(format!("Invalid base58 '{}': {}", address, e)))
    }

    /// Create a Pubkey from a byte slice with length validation.
    fn from_bytes_checked(bytes: &[u8]) -> Result<Pubkey, WasmStreamError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            WasmStreamError::InvalidInput(format!(
                "Invalid public key length: expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Pubkey::new_from_array(array))
    }

    /// Address of an account created with `CreateAccountWithSeed`, so it
    /// can be referenced before the account exists.
    fn derive_with_seed(
        base: &Pubkey,
        seed: &str,
        owner: &Pubkey,
    ) -> Result<Pubkey, WasmStreamError> {
        Pubkey::create_with_seed(base, seed, owner).map_err(|e| {
            WasmStreamError::InvalidInput(format!("Cannot derive address from seed '{}': {}", seed, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";
    const PROGRAM: &str = "3MWn8G9eHvHXRpdb9fBduDpD5XD4SLbgxkbBwe2s9G8Q";

    #[test]
    fn test_from_base58() {
        let pubkey = Pubkey::from_base58(WALLET).unwrap();
        assert_eq!(pubkey.to_string(), WALLET);
    }

    #[test]
    fn test_from_bytes() {
        let bytes = [0u8; 32];
        let pubkey = Pubkey::from_bytes_checked(&bytes).unwrap();
        assert_eq!(pubkey.to_bytes(), bytes);
    }

    #[test]
    fn test_invalid_base58() {
        assert!(matches!(
            Pubkey::from_base58("invalid!@#$"),
            Err(WasmStreamError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_length() {
        assert!(Pubkey::from_bytes_checked(&[0u8; 31]).is_err());
        assert!(Pubkey::from_bytes_checked(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_system_program_is_zero_bytes() {
        let addr1 = Pubkey::from_base58("11111111111111111111111111111111").unwrap();
        let addr2 = Pubkey::from_bytes_checked(&[0u8; 32]).unwrap();
        assert_eq!(addr1, addr2);
    }

    #[test]
    fn test_derive_with_seed_is_deterministic() {
        let base = Pubkey::from_base58(WALLET).unwrap();
        let owner = Pubkey::from_base58(PROGRAM).unwrap();

        let a = Pubkey::derive_with_seed(&base, "abcdef0.123", &owner).unwrap();
        let b = Pubkey::derive_with_seed(&base, "abcdef0.123", &owner).unwrap();
        assert_eq!(a, b);

        let c = Pubkey::derive_with_seed(&base, "abcdef0.124", &owner).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_derive_with_seed_known_address() {
        let base = Pubkey::from_base58(WALLET).unwrap();
        let owner = Pubkey::from_base58(PROGRAM).unwrap();

        let derived = Pubkey::derive_with_seed(&base, "seed", &owner).unwrap();
        assert_eq!(derived.to_string(), "AYjtvSA8bB4CHomtAiP1A7dc2U9sASW4fLpd8ztPTpwq");
    }

    #[test]
    fn test_derive_with_seed_rejects_long_seed() {
        let base = Pubkey::from_base58(WALLET).unwrap();
        let owner = Pubkey::from_base58(PROGRAM).unwrap();
        let seed = "x".repeat(MAX_SEED_LEN + 1);
        assert!(Pubkey::derive_with_seed(&base, &seed, &owner).is_err());
        assert!(Pubkey::derive_with_seed(&base, &seed[..MAX_SEED_LEN], &owner).is_ok());
    }

    #[test]
    fn test_derive_with_seed_rejects_pda_marker_owner() {
        let base = Pubkey::from_base58(WALLET).unwrap();
        let mut owner_bytes = [7u8; 32];
        owner_bytes[11..].copy_from_slice(b"ProgramDerivedAddress");
        let owner = Pubkey::new_from_array(owner_bytes);
        assert!(matches!(
            Pubkey::derive_with_seed(&base, "seed", &owner),
            Err(WasmStreamError::InvalidInput(_))
        ));
    }
}
