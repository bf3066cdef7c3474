use anchor_lang::prelude::*;

use crate::{
    constants::{PROPOSAL_SEED, REGISTRY_SEED},
    state::{Proposal, ProposalCreated, Registry},
};

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    // The address is derived from the counter before it is incremented
    #[account(
        init_if_needed,
        payer = creator,
        space = Proposal::space(0),
        seeds = [PROPOSAL_SEED, registry.key().as_ref(), registry.proposal_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    /// Creates the next proposal of the registry. Any signer may propose.
    ///
    /// The proposal is stored at the PDA of the registry's current counter, and the counter
    /// is incremented in the same transaction.
    ///
    /// # Arguments
    /// * `description` - What is being voted on (max 256 bytes)
    pub fn create_proposal(
        &mut self,
        description: String,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        let registry_key = self.registry.key();
        let creator = self.creator.key();

        self.registry.open_proposal(
            &mut self.proposal,
            registry_key,
            creator,
            description,
            bumps.proposal,
        )?;

        msg!("Created proposal {} for registry {}", self.proposal.index, registry_key);

        emit!(ProposalCreated {
            registry: registry_key,
            proposal: self.proposal.key(),
            index: self.proposal.index,
            creator,
        });

        Ok(())
    }
}
