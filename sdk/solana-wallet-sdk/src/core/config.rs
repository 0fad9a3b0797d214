use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::core::constants::{DEFAULT_PROGRAM_ID, MAX_MULTIPLE_ACCOUNTS};

/// Settings for account reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Owner every fetched wallet account must have
    pub program_id: Pubkey,

    /// Read consistency; `None` uses the connection default
    pub commitment: Option<CommitmentConfig>,

    /// Keys per `get_multiple_accounts` request, clamped to `1..=MAX_MULTIPLE_ACCOUNTS`
    pub batch_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            commitment: None,
            batch_size: MAX_MULTIPLE_ACCOUNTS,
        }
    }
}

impl FetchConfig {
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = Some(commitment);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub(crate) fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_MULTIPLE_ACCOUNTS)
    }
}
