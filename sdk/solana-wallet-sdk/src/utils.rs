use crate::core::config::FetchConfig;
use crate::core::connection::SolConnection;
use crate::error::{Result, WalletSdkError};
use futures::future::try_join_all;
use log::{debug, warn};
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use solana_wallet_interface::{Wallet, SEED_SIGNER, SEED_VAULT};

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// Derive the PDA that signs vault transfers: ["signer", wallet]
pub fn derive_wallet_signer_pda(program_id: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_SIGNER, wallet.as_ref()], program_id)
}

/// Derive the vault token account PDA: ["vault", wallet]
pub fn derive_vault_pda(program_id: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_VAULT, wallet.as_ref()], program_id)
}

/// Associated token account of `owner` for `mint` under the SPL token program
pub fn get_associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}

//=============================================================================
// Account Fetching & Parsing
//=============================================================================

/// Fetch raw account data, failing if the account does not exist
pub async fn fetch_wallet_account(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Account> {
    connection
        .get_account(address, None)
        .await
        .map_err(|e| WalletSdkError::Connection(e.to_string()))?
        .ok_or(WalletSdkError::AccountNotFound(*address))
}

/// Validate owner and decode a wallet account read from `address`
pub fn decode_wallet_account(
    program_id: &Pubkey,
    address: &Pubkey,
    account: &Account,
) -> Result<Wallet> {
    if account.owner != *program_id {
        warn!(
            "account {} owned by {}, expected {}",
            address, account.owner, program_id
        );
        return Err(WalletSdkError::OwnershipMismatch {
            address: *address,
            expected: *program_id,
            actual: account.owner,
        });
    }

    Wallet::decode(&account.data).map_err(|e| {
        warn!("account {} failed to decode: {}", address, e);
        WalletSdkError::from_state_error(*address, e)
    })
}

/// Fetch and decode a wallet. A missing account is `Ok(None)`.
pub async fn fetch_wallet(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Option<Wallet>> {
    fetch_wallet_with_config(connection, address, &FetchConfig::default()).await
}

pub async fn fetch_wallet_with_config(
    connection: &impl SolConnection,
    address: &Pubkey,
    config: &FetchConfig,
) -> Result<Option<Wallet>> {
    debug!("fetching wallet {}", address);

    let account = connection
        .get_account(address, config.commitment)
        .await
        .map_err(|e| WalletSdkError::Connection(e.to_string()))?;

    match account {
        Some(account) => decode_wallet_account(&config.program_id, address, &account).map(Some),
        None => {
            debug!("wallet {} not found", address);
            Ok(None)
        },
    }
}

/// Fetch and decode several wallets.
///
/// Returns one slot per input address in input order, repeats included.
/// Fails as a whole if any existing account is foreign or undecodable.
pub async fn fetch_wallets(
    connection: &impl SolConnection,
    addresses: &[Pubkey],
) -> Result<Vec<Option<Wallet>>> {
    fetch_wallets_with_config(connection, addresses, &FetchConfig::default()).await
}

pub async fn fetch_wallets_with_config(
    connection: &impl SolConnection,
    addresses: &[Pubkey],
    config: &FetchConfig,
) -> Result<Vec<Option<Wallet>>> {
    let batch_size = config.effective_batch_size();
    debug!(
        "fetching {} wallets in batches of {}",
        addresses.len(),
        batch_size
    );

    // try_join_all keeps chunk order
    let chunks = try_join_all(addresses.chunks(batch_size).map(|chunk| async move {
        let accounts = connection
            .get_multiple_accounts(chunk, config.commitment)
            .await
            .map_err(|e| WalletSdkError::Connection(e.to_string()))?;

        if accounts.len() != chunk.len() {
            return Err(WalletSdkError::Connection(format!(
                "requested {} accounts, received {}",
                chunk.len(),
                accounts.len()
            )));
        }

        Ok::<_, WalletSdkError>(accounts)
    }))
    .await?;

    addresses
        .iter()
        .zip(chunks.into_iter().flatten())
        .map(|(address, account)| match account {
            Some(account) => decode_wallet_account(&config.program_id, address, &account).map(Some),
            None => Ok(None),
        })
        .collect()
}

//=============================================================================
// Submission
//=============================================================================

/// Send a signed transaction. Custom program failures come back as
/// [`WalletSdkError::ProgramDefined`] or [`WalletSdkError::UnknownProgramError`].
pub async fn submit_transaction(
    connection: &impl SolConnection,
    tx: &Transaction,
) -> Result<Signature> {
    connection
        .send_transaction(tx)
        .await
        .map_err(WalletSdkError::from_connection_error)
}
