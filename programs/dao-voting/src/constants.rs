/// Seed of the singleton registry PDA
pub const REGISTRY_SEED: &[u8] = b"dao";

/// Leading seed of every proposal PDA, followed by the registry key and the proposal index
pub const PROPOSAL_SEED: &[u8] = b"proposal";

/// Maximum registry name length in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Maximum number of voters per proposal.
///
/// The whole voter set is deserialized onto the 32 KiB program heap on every vote and close,
/// and the bump allocator never frees. 256 keys keep that under 13 KiB.
pub const MAX_VOTERS: usize = 256;
