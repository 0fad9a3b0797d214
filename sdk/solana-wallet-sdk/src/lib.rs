pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::wallet::SolanaWallet;
pub use crate::core::config::FetchConfig;
pub use crate::core::connection::SolConnection;
pub use crate::error::{Result, WalletSdkError};
pub use crate::types::WalletJson;
pub use crate::utils::{
    decode_wallet_account, derive_vault_pda, derive_wallet_signer_pda, fetch_wallet,
    fetch_wallet_account, fetch_wallet_with_config, fetch_wallets, fetch_wallets_with_config,
    get_associated_token_address, submit_transaction,
};

pub mod state {
    pub use solana_wallet_interface::error::{lookup, ProgramErrorEntry, WalletError};
    pub use solana_wallet_interface::{AccountDiscriminator, Wallet, WalletInstruction};
}
