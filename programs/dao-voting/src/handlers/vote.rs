use anchor_lang::prelude::*;

use crate::{
    constants::{PROPOSAL_SEED, REGISTRY_SEED},
    state::{Proposal, Registry, VoteCast, VoteChoice},
};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    // Room for one more voter key, paid by the voter. Rolled back if the vote is rejected.
    #[account(
        mut,
        has_one = registry,
        seeds = [PROPOSAL_SEED, registry.key().as_ref(), proposal.index.to_le_bytes().as_ref()],
        bump = proposal.bump,
        realloc = Proposal::space(proposal.voters.len() + 1),
        realloc::payer = voter,
        realloc::zero = false,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    /// Casts the signer's vote on an active proposal.
    ///
    /// Fails with `ProposalNotActive` once the proposal is closed, with `AlreadyVoted`
    /// if the signer has voted before and with `VoterLimitReached` once the voter set is full.
    ///
    /// # Arguments
    /// * `choice` - Yes or No
    pub fn vote(&mut self, choice: VoteChoice) -> Result<()> {
        let voter = self.voter.key();
        let proposal = &mut self.proposal;

        proposal.cast(voter, choice)?;

        msg!(
            "Vote {:?} on proposal {} (yes: {}, no: {})",
            choice,
            proposal.index,
            proposal.yes_votes,
            proposal.no_votes
        );

        emit!(VoteCast {
            proposal: proposal.key(),
            voter,
            choice,
            yes_votes: proposal.yes_votes,
            no_votes: proposal.no_votes,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
