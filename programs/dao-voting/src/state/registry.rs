use anchor_lang::prelude::*;

use crate::{constants::MAX_NAME_LEN, error::ErrorCode, state::Proposal};

/// The organization record, a singleton at the registry PDA.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct Registry {
    /// Signer of `initialize`; the only key allowed to close proposals
    pub authority: Pubkey,
    /// Human readable label (max 32 bytes)
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Number of proposals ever created, which is also the index of the next one
    pub proposal_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Registry {
    pub fn new(authority: Pubkey, name: String, bump: u8) -> Result<Self> {
        require!(name.len() <= MAX_NAME_LEN, ErrorCode::NameTooLong);

        Ok(Self {
            authority,
            name,
            proposal_count: 0,
            bump,
        })
    }

    /// Writes a new registry into a freshly allocated account.
    ///
    /// # Arguments
    /// * `authority` - Signer that becomes the registry authority
    /// * `name` - Label for the organization (max 32 bytes)
    /// * `bump` - Bump of the registry PDA
    pub fn initialize(&mut self, authority: Pubkey, name: String, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyInitialized);
        *self = Self::new(authority, name, bump)?;
        Ok(())
    }

    /// A freshly allocated account is zeroed, so it has no authority yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn is_authority(&self, caller: &Pubkey) -> bool {
        self.authority == *caller
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_authority(caller), ErrorCode::Unauthorized);
        Ok(())
    }

    /// Writes the next proposal into `slot`, the account at the PDA of the current counter.
    ///
    /// Fails with `AlreadyInitialized` if `slot` already holds a proposal. Neither account
    /// changes on failure.
    pub fn open_proposal(
        &mut self,
        slot: &mut Proposal,
        registry: Pubkey,
        creator: Pubkey,
        description: String,
        bump: u8,
    ) -> Result<()> {
        require!(
            self.is_initialized(),
            anchor_lang::error::ErrorCode::AccountNotInitialized
        );
        require!(!slot.is_initialized(), ErrorCode::AlreadyInitialized);

        *slot = self.spawn_proposal(registry, creator, description, bump)?;
        Ok(())
    }

    /// Ends voting on `proposal`. The authority is checked before the proposal state, so a
    /// stranger gets `Unauthorized` even for a proposal that is already closed.
    pub fn close_proposal(&self, caller: &Pubkey, proposal: &mut Proposal) -> Result<()> {
        self.require_authority(caller)?;
        proposal.end_voting()
    }

    /// Builds the proposal for the current counter value and advances the counter.
    ///
    /// The counter only moves once the proposal has been validated, so a failed call
    /// leaves the registry untouched.
    ///
    /// # Arguments
    /// * `registry` - Address of this registry, stored as the proposal's back reference
    /// * `creator` - Signer creating the proposal
    /// * `description` - Proposal text (max 256 bytes)
    /// * `bump` - Bump of the proposal PDA
    pub fn spawn_proposal(
        &mut self,
        registry: Pubkey,
        creator: Pubkey,
        description: String,
        bump: u8,
    ) -> Result<Proposal> {
        let index = self.proposal_count;
        let next = index
            .checked_add(1)
            .ok_or(ErrorCode::ProposalLimitReached)?;

        let proposal = Proposal::new(registry, creator, index, description, bump)?;
        self.proposal_count = next;

        Ok(proposal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_fails_with;

    fn registry(authority: Pubkey) -> Registry {
        Registry::new(authority, "Test DAO".to_string(), 254).unwrap()
    }

    #[test]
    fn new_registry_starts_with_no_proposals() {
        let alice = Pubkey::new_unique();
        let registry = registry(alice);

        assert_eq!(registry.name, "Test DAO");
        assert_eq!(registry.authority, alice);
        assert_eq!(registry.proposal_count, 0);
        assert_eq!(registry.bump, 254);
        assert!(registry.is_initialized());
    }

    #[test]
    fn zeroed_account_is_not_initialized() {
        assert!(!Registry::default().is_initialized());
    }

    #[test]
    fn name_is_limited_to_reserved_space() {
        let alice = Pubkey::new_unique();
        assert!(Registry::new(alice, "a".repeat(MAX_NAME_LEN), 0).is_ok());
        assert_fails_with(
            Registry::new(alice, "a".repeat(MAX_NAME_LEN + 1), 0),
            ErrorCode::NameTooLong,
        );
    }

    #[test]
    fn init_space_covers_longest_name() {
        assert_eq!(Registry::INIT_SPACE, 32 + 4 + MAX_NAME_LEN + 8 + 1);
    }

    #[test]
    fn only_the_authority_passes_the_check() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let registry = registry(alice);

        assert!(registry.is_authority(&alice));
        assert!(!registry.is_authority(&bob));
        assert!(registry.require_authority(&alice).is_ok());
        assert_fails_with(registry.require_authority(&bob), ErrorCode::Unauthorized);
    }

    #[test]
    fn spawning_captures_counter_and_increments_it() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let mut registry = registry(alice);

        let first = registry
            .spawn_proposal(key, alice, "first".to_string(), 1)
            .unwrap();
        let second = registry
            .spawn_proposal(key, bob, "second".to_string(), 2)
            .unwrap();

        assert_eq!(first.index, 0);
        assert_eq!(second.index, 1);
        assert_eq!(second.creator, bob);
        assert_eq!(second.registry, key);
        assert_eq!(registry.proposal_count, 2);
    }

    #[test]
    fn rejected_description_leaves_counter_alone() {
        let alice = Pubkey::new_unique();
        let mut registry = registry(alice);

        let result = registry.spawn_proposal(
            Pubkey::new_unique(),
            alice,
            "x".repeat(crate::constants::MAX_DESCRIPTION_LEN + 1),
            0,
        );

        assert_fails_with(result, ErrorCode::DescriptionTooLong);
        assert_eq!(registry.proposal_count, 0);
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let alice = Pubkey::new_unique();
        let mut registry = registry(alice);
        registry.proposal_count = u64::MAX;

        let result = registry.spawn_proposal(Pubkey::new_unique(), alice, "late".to_string(), 0);

        assert_fails_with(result, ErrorCode::ProposalLimitReached);
        assert_eq!(registry.proposal_count, u64::MAX);
    }

    #[test]
    fn initialize_fills_zeroed_account_once() {
        let alice = Pubkey::new_unique();
        let mut account = Registry::default();

        account.initialize(alice, "Test DAO".to_string(), 253).unwrap();
        assert_eq!(account.authority, alice);
        assert_eq!(account.bump, 253);

        assert_fails_with(
            account.initialize(Pubkey::new_unique(), "Other".to_string(), 1),
            ErrorCode::AlreadyInitialized,
        );
        assert_eq!(account.authority, alice);
        assert_eq!(account.name, "Test DAO");
    }

    #[test]
    fn failed_initialize_leaves_account_zeroed() {
        let mut account = Registry::default();

        assert_fails_with(
            account.initialize(Pubkey::new_unique(), "n".repeat(MAX_NAME_LEN + 1), 1),
            ErrorCode::NameTooLong,
        );
        assert!(!account.is_initialized());
    }

    #[test]
    fn open_proposal_rejects_occupied_slot() {
        let alice = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let mut registry = registry(alice);
        let mut slot = Proposal::default();

        registry
            .open_proposal(&mut slot, key, alice, "first".to_string(), 9)
            .unwrap();
        assert_eq!(slot.index, 0);
        assert_eq!(slot.bump, 9);

        registry.proposal_count = 0;
        assert_fails_with(
            registry.open_proposal(&mut slot, key, alice, "again".to_string(), 9),
            ErrorCode::AlreadyInitialized,
        );
        assert_eq!(slot.description, "first");
        assert_eq!(registry.proposal_count, 0);
    }

    #[test]
    fn open_proposal_requires_initialized_registry() {
        let mut zeroed = Registry::default();
        let mut slot = Proposal::default();

        assert_fails_with(
            zeroed.open_proposal(&mut slot, Pubkey::new_unique(), Pubkey::new_unique(), "x".to_string(), 0),
            anchor_lang::error::ErrorCode::AccountNotInitialized,
        );
        assert!(!slot.is_initialized());
        assert_eq!(zeroed.proposal_count, 0);
    }

    #[test]
    fn stranger_closing_closed_proposal_is_unauthorized() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut registry = registry(alice);
        let mut slot = Proposal::default();
        registry
            .open_proposal(&mut slot, Pubkey::new_unique(), alice, "p".to_string(), 0)
            .unwrap();

        registry.close_proposal(&alice, &mut slot).unwrap();

        assert_fails_with(registry.close_proposal(&bob, &mut slot), ErrorCode::Unauthorized);
        assert_fails_with(
            registry.close_proposal(&alice, &mut slot),
            ErrorCode::ProposalNotActive,
        );
        assert!(!slot.is_active);
    }
}
