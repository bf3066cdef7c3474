use anchor_lang::prelude::*;

use crate::{
    constants::REGISTRY_SEED,
    state::{Registry, RegistryInitialized},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // init_if_needed so a second call reaches the handler and fails with AlreadyInitialized
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Creates the registry and makes the signer its authority.
    ///
    /// Can only succeed once; the registry lives at a fixed PDA.
    ///
    /// # Arguments
    /// * `name` - Label for the organization (max 32 bytes)
    pub fn initialize(&mut self, name: String, bumps: &InitializeBumps) -> Result<()> {
        msg!("Initializing registry {}", name);

        let authority = self.authority.key();
        self.registry.initialize(authority, name, bumps.registry)?;

        emit!(RegistryInitialized {
            registry: self.registry.key(),
            authority,
            name: self.registry.name.clone(),
        });

        Ok(())
    }
}
