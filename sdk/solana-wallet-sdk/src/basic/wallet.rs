use crate::basic::actions::{DepositBuilder, InitializeBuilder, UpdateAuthorityBuilder, WithdrawBuilder};
use crate::core::config::FetchConfig;
use crate::core::connection::SolConnection;
use crate::core::constants::DEFAULT_PROGRAM_ID;
use crate::error::Result;
use crate::utils;
use solana_sdk::pubkey::Pubkey;
use solana_wallet_interface::Wallet;

/// A solana-wallet record on-chain and the PDAs derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolanaWallet {
    /// Address of the wallet record
    pub address: Pubkey,

    /// Program ID of the solana-wallet contract
    pub program_id: Pubkey,

    /// PDA that signs vault transfers
    pub wallet_signer: Pubkey,

    /// Signer PDA bump seed
    pub signer_bump: u8,

    /// Vault token account PDA
    pub vault: Pubkey,

    /// Vault PDA bump seed
    pub vault_bump: u8,
}

impl SolanaWallet {
    pub const DEFAULT_PROGRAM_ID: Pubkey = DEFAULT_PROGRAM_ID;

    /// Construct a handle for the wallet at `address`, deriving its PDAs
    pub fn new(program_id: Pubkey, address: Pubkey) -> Self {
        let (wallet_signer, signer_bump) = utils::derive_wallet_signer_pda(&program_id, &address);
        let (vault, vault_bump) = utils::derive_vault_pda(&program_id, &address);

        Self {
            address,
            program_id,
            wallet_signer,
            signer_bump,
            vault,
            vault_bump,
        }
    }

    /// Handle under the default program ID
    pub fn from_address(address: Pubkey) -> Self {
        Self::new(Self::DEFAULT_PROGRAM_ID, address)
    }

    /// Fetch the wallet record. `None` if the account does not exist.
    pub async fn fetch_state(&self, connection: &impl SolConnection) -> Result<Option<Wallet>> {
        let config = FetchConfig::default().with_program_id(self.program_id);
        utils::fetch_wallet_with_config(connection, &self.address, &config).await
    }

    /// Whether `state` agrees with the PDAs derived for this handle
    pub fn matches_state(&self, state: &Wallet) -> bool {
        state.vault == self.vault
            && state.vault_bump == self.vault_bump
            && state.signer_bump == self.signer_bump
    }

    /// Create a new wallet
    pub fn create() -> InitializeBuilder {
        InitializeBuilder::new()
    }

    pub fn deposit(&self) -> DepositBuilder<'_> {
        DepositBuilder::new(self)
    }

    pub fn withdraw(&self) -> WithdrawBuilder<'_> {
        WithdrawBuilder::new(self)
    }

    pub fn update_authority(&self) -> UpdateAuthorityBuilder<'_> {
        UpdateAuthorityBuilder::new(self)
    }
}
