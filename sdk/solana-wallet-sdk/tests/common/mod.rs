#![allow(dead_code)]

use async_trait::async_trait;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use solana_wallet_sdk::core::connection::{ConnectionError, SolConnection};
use solana_wallet_sdk::state::{AccountDiscriminator, Wallet};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory ledger standing in for an RPC node.
#[derive(Default)]
pub struct TestContext {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    pub blockhash: Hash,
    pub multiple_account_calls: AtomicUsize,
    pub requested_commitments: Mutex<Vec<Option<CommitmentConfig>>>,
    /// Every read fails with this message when set
    pub fail_reads: Option<String>,
    /// Every send fails with this error when set
    pub fail_sends: Option<TransactionError>,
    /// Drop the last entry of each multi-account response
    pub truncate_batches: bool,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_from_array([9u8; 32]),
            ..Self::default()
        }
    }

    pub fn insert(&self, address: Pubkey, account: Account) {
        self.accounts.lock().unwrap().insert(address, account);
    }

    /// Store `wallet` at `address` owned by `owner`
    pub fn insert_wallet(&self, address: Pubkey, owner: Pubkey, wallet: &Wallet) {
        self.insert(address, wallet_account(owner, wallet_bytes(wallet)));
    }

    pub fn batch_calls(&self) -> usize {
        self.multiple_account_calls.load(Ordering::SeqCst)
    }
}

/// On-chain bytes of `wallet`, written field by field
pub fn wallet_bytes(wallet: &Wallet) -> Vec<u8> {
    let mut data = Wallet::DISCRIMINATOR.to_vec();
    data.extend_from_slice(wallet.authority.as_ref());
    data.extend_from_slice(wallet.vault.as_ref());
    data.extend_from_slice(&wallet.withdrawn.to_le_bytes());
    data.push(wallet.signer_bump);
    data.push(wallet.vault_bump);
    // program allocation is padded to 88 bytes
    data.resize(Wallet::SPACE, 0);
    data
}

pub fn wallet_account(owner: Pubkey, data: Vec<u8>) -> Account {
    Account {
        lamports: 1_503_360,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn sample_wallet(seed: u8) -> Wallet {
    Wallet {
        authority: Pubkey::new_from_array([seed; 32]),
        vault: Pubkey::new_from_array([seed.wrapping_add(100); 32]),
        withdrawn: 1_000 * seed as u64,
        signer_bump: 255 - seed,
        vault_bump: 250 - (seed % 10),
    }
}

#[async_trait]
impl SolConnection for TestContext {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, ConnectionError> {
        if let Some(err) = &self.fail_sends {
            return Err(Box::new(err.clone()) as ConnectionError);
        }
        Ok(tx.signatures.first().copied().unwrap_or_default())
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Option<Account>, ConnectionError> {
        if let Some(msg) = &self.fail_reads {
            return Err(msg.clone().into());
        }
        self.requested_commitments.lock().unwrap().push(commitment);
        Ok(self.accounts.lock().unwrap().get(pubkey).cloned())
    }

    async fn get_multiple_accounts(
        &self,
        pubkeys: &[Pubkey],
        commitment: Option<CommitmentConfig>,
    ) -> Result<Vec<Option<Account>>, ConnectionError> {
        if let Some(msg) = &self.fail_reads {
            return Err(msg.clone().into());
        }
        self.multiple_account_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_commitments.lock().unwrap().push(commitment);

        let accounts = self.accounts.lock().unwrap();
        let mut out: Vec<Option<Account>> = pubkeys.iter().map(|k| accounts.get(k).cloned()).collect();
        if self.truncate_batches {
            out.pop();
        }
        Ok(out)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ConnectionError> {
        Ok(self.blockhash)
    }
}

pub fn setup_test_context() -> TestContext {
    TestContext::new()
}
