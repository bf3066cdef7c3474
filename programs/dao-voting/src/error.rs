use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Account is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not the registry authority")]
    Unauthorized,
    #[msg("Proposal is not active")]
    ProposalNotActive,
    #[msg("User has already voted on this proposal")]
    AlreadyVoted,
    #[msg("DAO name is too long (max 32 bytes)")]
    NameTooLong,
    #[msg("Proposal description is too long (max 256 bytes)")]
    DescriptionTooLong,
    #[msg("Proposal limit reached")]
    ProposalLimitReached,
    #[msg("Vote tally overflow")]
    TallyOverflow,
    #[msg("Proposal has reached the maximum number of voters")]
    VoterLimitReached,
}

#[cfg(test)]
pub(crate) fn assert_fails_with<T: std::fmt::Debug>(result: Result<T>, expected: impl Into<u32>) {
    let err = result.expect_err("operation should have failed");
    assert_eq!(
        ProgramError::from(err),
        ProgramError::Custom(expected.into())
    );
}
