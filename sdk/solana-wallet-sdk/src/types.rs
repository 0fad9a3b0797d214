use crate::error::WalletSdkError;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_wallet_interface::Wallet;
use std::str::FromStr;

/// Structured form of a [`Wallet`] used for display and interchange.
///
/// Addresses are base58 strings; integers are kept as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletJson {
    pub authority: String,
    pub vault: String,
    pub withdrawn: u64,
    pub signer_bump: u8,
    pub vault_bump: u8,
}

impl From<&Wallet> for WalletJson {
    fn from(wallet: &Wallet) -> Self {
        Self {
            authority: wallet.authority.to_string(),
            vault: wallet.vault.to_string(),
            withdrawn: wallet.withdrawn,
            signer_bump: wallet.signer_bump,
            vault_bump: wallet.vault_bump,
        }
    }
}

impl TryFrom<WalletJson> for Wallet {
    type Error = WalletSdkError;

    fn try_from(json: WalletJson) -> Result<Self, Self::Error> {
        Ok(Wallet {
            authority: parse_pubkey("authority", &json.authority)?,
            vault: parse_pubkey("vault", &json.vault)?,
            withdrawn: json.withdrawn,
            signer_bump: json.signer_bump,
            vault_bump: json.vault_bump,
        })
    }
}

fn parse_pubkey(field: &str, value: &str) -> Result<Pubkey, WalletSdkError> {
    Pubkey::from_str(value)
        .map_err(|e| WalletSdkError::InvalidJson(format!("{}: {} ({})", field, value, e)))
}

impl WalletJson {
    pub fn to_json_string(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|e| WalletSdkError::InvalidJson(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        serde_json::from_str(s).map_err(|e| WalletSdkError::InvalidJson(e.to_string()))
    }
}

