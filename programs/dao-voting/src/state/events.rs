use anchor_lang::prelude::*;

use crate::state::VoteChoice;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub authority: Pubkey,
    pub name: String,
}

#[event]
pub struct ProposalCreated {
    pub registry: Pubkey,
    pub proposal: Pubkey,
    /// Sequence number the proposal address was derived from
    pub index: u64,
    pub creator: Pubkey,
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    /// Tallies after this vote
    pub yes_votes: u64,
    pub no_votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalClosed {
    pub proposal: Pubkey,
    /// Final tallies
    pub yes_votes: u64,
    pub no_votes: u64,
    pub timestamp: i64,
}
