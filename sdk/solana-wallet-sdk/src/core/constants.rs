use solana_sdk::pubkey::Pubkey;

/// Program ID of the deployed solana-wallet program
pub const DEFAULT_PROGRAM_ID: Pubkey = solana_wallet_interface::ID;

/// Upper bound on keys per `getMultipleAccounts` request
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;
