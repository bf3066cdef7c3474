// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]
// Fix warning: use of deprecated method `anchor_lang::prelude::AccountInfo::<'a>::realloc`: Use AccountInfo::resize() instead
// See https://solana.stackexchange.com/questions/22979
#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ErrorCode;
pub use handlers::*;
pub use state::*;

declare_id!("5dQXdXzWB4q8MfbitbPVmJed8tCPD2MpvWAafACX2XPe");

#[program]
pub mod dao_voting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, name: String) -> Result<()> {
        ctx.accounts.initialize(name, &ctx.bumps)
    }

    pub fn create_proposal(ctx: Context<CreateProposal>, description: String) -> Result<()> {
        ctx.accounts.create_proposal(description, &ctx.bumps)
    }

    pub fn vote(ctx: Context<CastVote>, choice: VoteChoice) -> Result<()> {
        ctx.accounts.vote(choice)
    }

    pub fn close_proposal(ctx: Context<CloseProposal>) -> Result<()> {
        ctx.accounts.close_proposal()
    }
}
