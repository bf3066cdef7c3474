use anchor_lang::prelude::*;

use crate::{
    constants::{PROPOSAL_SEED, REGISTRY_SEED},
    state::{Proposal, ProposalClosed, Registry},
};

#[derive(Accounts)]
pub struct CloseProposal<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        has_one = registry,
        seeds = [PROPOSAL_SEED, registry.key().as_ref(), proposal.index.to_le_bytes().as_ref()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> CloseProposal<'info> {
    /// Closes a proposal for good.
    ///
    /// Only the registry authority can close, and an already closed proposal is rejected
    /// with `ProposalNotActive`. The account is kept so the final tallies stay readable.
    pub fn close_proposal(&mut self) -> Result<()> {
        self.registry
            .close_proposal(&self.authority.key(), &mut self.proposal)?;

        let proposal = &self.proposal;

        msg!(
            "Closed proposal {} (yes: {}, no: {})",
            proposal.index,
            proposal.yes_votes,
            proposal.no_votes
        );

        emit!(ProposalClosed {
            proposal: proposal.key(),
            yes_votes: proposal.yes_votes,
            no_votes: proposal.no_votes,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
