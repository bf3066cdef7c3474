use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_VOTERS},
    error::ErrorCode,
};

/// A ballot option.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteChoice {
    Yes,
    No,
}

/// A yes/no proposal spawned by a registry.
///
/// Starts active and can be closed exactly once by the registry authority. While active,
/// every key may vote once, up to `MAX_VOTERS` keys. The account grows by one key per
/// accepted vote.
#[account]
#[derive(Debug, Default)]
pub struct Proposal {
    /// PDA bump seed
    pub bump: u8,
    /// Registry that spawned this proposal
    pub registry: Pubkey,
    /// Signer that created the proposal
    pub creator: Pubkey,
    /// Registry counter value at creation, part of the PDA seeds
    pub index: u64,
    /// Proposal text (max 256 bytes)
    pub description: String,
    /// False once the proposal has been closed
    pub is_active: bool,
    pub yes_votes: u64,
    pub no_votes: u64,
    /// Keys that have voted, kept sorted for binary search
    pub voters: Vec<Pubkey>,
}

impl Proposal {
    // discriminator + bump + registry + creator + index + description + is_active
    // + yes_votes + no_votes + voters length prefix
    const BASE_SPACE: usize = 8 + 1 + 32 + 32 + 8 + (4 + MAX_DESCRIPTION_LEN) + 1 + 8 + 8 + 4;

    /// Account size, discriminator included, for a proposal holding `voters` keys.
    pub const fn space(voters: usize) -> usize {
        Self::BASE_SPACE + voters * 32
    }

    pub fn new(
        registry: Pubkey,
        creator: Pubkey,
        index: u64,
        description: String,
        bump: u8,
    ) -> Result<Self> {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );

        Ok(Self {
            bump,
            registry,
            creator,
            index,
            description,
            is_active: true,
            yes_votes: 0,
            no_votes: 0,
            voters: Vec::new(),
        })
    }

    /// A freshly allocated account is zeroed, so it points at no registry yet.
    pub fn is_initialized(&self) -> bool {
        self.registry != Pubkey::default()
    }

    pub fn has_voted(&self, voter: &Pubkey) -> bool {
        self.voters.binary_search(voter).is_ok()
    }

    pub fn total_votes(&self) -> u64 {
        self.yes_votes.saturating_add(self.no_votes)
    }

    /// Records `voter`'s ballot.
    ///
    /// A closed proposal reports `ProposalNotActive` even to keys that already voted, and a
    /// key that already voted gets `AlreadyVoted` even once the voter set is full. All checks
    /// run before the tally and voter set are written.
    pub fn cast(&mut self, voter: Pubkey, choice: VoteChoice) -> Result<()> {
        require!(self.is_active, ErrorCode::ProposalNotActive);

        let slot = match self.voters.binary_search(&voter) {
            Ok(_) => return err!(ErrorCode::AlreadyVoted),
            Err(slot) => slot,
        };
        require!(
            self.voters.len() < MAX_VOTERS,
            ErrorCode::VoterLimitReached
        );

        let tally = match choice {
            VoteChoice::Yes => &mut self.yes_votes,
            VoteChoice::No => &mut self.no_votes,
        };
        *tally = tally.checked_add(1).ok_or(ErrorCode::TallyOverflow)?;
        self.voters.insert(slot, voter);

        Ok(())
    }

    /// Ends voting. There is no way back, and closing twice is an error.
    pub fn end_voting(&mut self) -> Result<()> {
        require!(self.is_active, ErrorCode::ProposalNotActive);
        self.is_active = false;
        Ok(())
    }
}
