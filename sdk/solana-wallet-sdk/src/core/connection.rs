use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

pub type ConnectionError = Box<dyn Error + Send + Sync>;

/// Ledger access used by the SDK.
///
/// `commitment: None` means the connection's own default. Missing accounts
/// are `Ok(None)`; transport failures, timeouts and cancellations are `Err`.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, ConnectionError>;
    async fn get_account(
        &self,
        pubkey: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, ConnectionError>;

    /// Must return exactly one entry per requested key, in request order.
    async fn get_multiple_accounts(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, ConnectionError>;
    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError>;
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, ConnectionError> {
        Ok(RpcClient::send_transaction(self, tx).await?)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, ConnectionError> {
        let commitment = commitment.unwrap_or_else(|| self.commitment());
        Ok(self
            .get_account_with_commitment(pubkey, commitment)
            .await?
            .value)
    }

    async fn get_multiple_accounts(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, ConnectionError> {
        let commitment = commitment.unwrap_or_else(|| self.commitment());
        Ok(self
            .get_multiple_accounts_with_commitment(pubkeys, commitment)
            .await?
            .value)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError> {
        Ok(RpcClient::get_latest_blockhash(self).await?)
    }
}
