//! Off-chain derivation of the program's account addresses.
//!
//! These use the same seeds as the `seeds = [...]` constraints on the instruction
//! accounts, so a client can locate the registry and any proposal without a lookup.

use anchor_lang::prelude::*;

use crate::constants::{PROPOSAL_SEED, REGISTRY_SEED};

/// Address and bump of the registry account.
pub fn registry_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], &crate::ID)
}

/// Address and bump of the proposal created with sequence number `index` under `registry`.
///
/// The index is encoded as all 8 little-endian bytes of the `u64`, so addresses stay
/// distinct past 255 proposals.
pub fn proposal_address(registry: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL_SEED, registry.as_ref(), &index.to_le_bytes()],
        &crate::ID,
    )
}
