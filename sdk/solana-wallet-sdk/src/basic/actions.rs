use crate::advanced::instructions;
use crate::basic::wallet::SolanaWallet;
use crate::core::connection::SolConnection;
use crate::core::constants::DEFAULT_PROGRAM_ID;
use crate::error::{Result, WalletSdkError};
use crate::utils;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use solana_sdk::{system_program, sysvar};
use solana_wallet_interface::{
    DepositAccounts, InitializeAccounts, UpdateAuthorityAccounts, WithdrawAccounts,
};

/// Wrap a single instruction into an unsigned transaction paid by `payer`.
async fn unsigned_transaction(
    connection: &impl SolConnection,
    ix: Instruction,
    payer: &Pubkey,
) -> Result<Transaction> {
    let recent_blockhash = connection
        .get_latest_blockhash()
        .await
        .map_err(|e| WalletSdkError::Connection(e.to_string()))?;

    Ok(Transaction::new_unsigned(Message::new_with_blockhash(
        &[ix],
        Some(payer),
        &recent_blockhash,
    )))
}

/// Creates a new wallet record. The wallet account is a fresh keypair and
/// must co-sign together with the payer.
pub struct InitializeBuilder {
    program_id: Pubkey,
    wallet: Option<Pubkey>,
    authority: Option<Pubkey>,
    payer: Option<Pubkey>,
    mint: Option<Pubkey>,
    token_program: Pubkey,
}

impl Default for InitializeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InitializeBuilder {
    pub fn new() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            wallet: None,
            authority: None,
            payer: None,
            mint: None,
            token_program: spl_token::id(),
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_wallet(mut self, wallet: Pubkey) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_payer(mut self, payer: Pubkey) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_mint(mut self, mint: Pubkey) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }

    /// The handle the wallet will have once created.
    pub fn wallet_handle(&self) -> Result<SolanaWallet> {
        let wallet = self.wallet.ok_or(WalletSdkError::MissingField("wallet"))?;
        Ok(SolanaWallet::new(self.program_id, wallet))
    }

    pub fn accounts(&self) -> Result<InitializeAccounts> {
        let handle = self.wallet_handle()?;
        let payer = self.payer.ok_or(WalletSdkError::MissingField("payer"))?;

        Ok(InitializeAccounts {
            wallet: handle.address,
            // The payer manages the wallet unless told otherwise
            authority: self.authority.unwrap_or(payer),
            payer,
            wallet_signer: handle.wallet_signer,
            mint: self.mint.ok_or(WalletSdkError::MissingField("mint"))?,
            vault: handle.vault,
            token_program: self.token_program,
            system_program: system_program::id(),
            rent: sysvar::rent::id(),
        })
    }

    pub fn instruction(&self) -> Result<Instruction> {
        Ok(instructions::initialize(&self.program_id, &self.accounts()?))
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let accounts = self.accounts()?;
        let ix = instructions::initialize(&self.program_id, &accounts);
        unsigned_transaction(connection, ix, &accounts.payer).await
    }
}

pub struct DepositBuilder<'a> {
    wallet: &'a SolanaWallet,
    authority: Option<Pubkey>,
    source: Option<Pubkey>,
    mint: Option<Pubkey>,
    amount: Option<u64>,
    token_program: Pubkey,
}

impl<'a> DepositBuilder<'a> {
    pub fn new(wallet: &'a SolanaWallet) -> Self {
        Self {
            wallet,
            authority: None,
            source: None,
            mint: None,
            amount: None,
            token_program: spl_token::id(),
        }
    }

    /// Owner of the source token account
    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_source(mut self, source: Pubkey) -> Self {
        self.source = Some(source);
        self
    }

    /// Use the authority's associated token account for `mint` as the source
    pub fn with_mint(mut self, mint: Pubkey) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }

    pub fn accounts(&self) -> Result<DepositAccounts> {
        let authority = self
            .authority
            .ok_or(WalletSdkError::MissingField("authority"))?;
        let source = match (self.source, self.mint) {
            (Some(source), _) => source,
            (None, Some(mint)) => utils::get_associated_token_address(&authority, &mint),
            (None, None) => return Err(WalletSdkError::MissingField("source")),
        };

        Ok(DepositAccounts {
            wallet: self.wallet.address,
            authority,
            source,
            vault: self.wallet.vault,
            token_program: self.token_program,
        })
    }

    pub fn instruction(&self) -> Result<Instruction> {
        let amount = self.amount.ok_or(WalletSdkError::MissingField("amount"))?;
        // Rejected on-chain with AmountMustBeMoreZero
        if amount == 0 {
            return Err(WalletSdkError::InvalidAmount);
        }

        Ok(instructions::deposit(
            &self.wallet.program_id,
            &self.accounts()?,
            amount,
        ))
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
        payer: Pubkey,
    ) -> Result<Transaction> {
        let ix = self.instruction()?;
        unsigned_transaction(connection, ix, &payer).await
    }
}

pub struct WithdrawBuilder<'a> {
    wallet: &'a SolanaWallet,
    authority: Option<Pubkey>,
    destination: Option<Pubkey>,
    mint: Option<Pubkey>,
    token_program: Pubkey,
}

impl<'a> WithdrawBuilder<'a> {
    pub fn new(wallet: &'a SolanaWallet) -> Self {
        Self {
            wallet,
            authority: None,
            destination: None,
            mint: None,
            token_program: spl_token::id(),
        }
    }

    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_destination(mut self, destination: Pubkey) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Use the authority's associated token account for `mint` as the destination
    pub fn with_mint(mut self, mint: Pubkey) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }

    pub fn accounts(&self) -> Result<WithdrawAccounts> {
        let authority = self
            .authority
            .ok_or(WalletSdkError::MissingField("authority"))?;
        let destination = match (self.destination, self.mint) {
            (Some(destination), _) => destination,
            (None, Some(mint)) => utils::get_associated_token_address(&authority, &mint),
            (None, None) => return Err(WalletSdkError::MissingField("destination")),
        };

        Ok(WithdrawAccounts {
            wallet: self.wallet.address,
            authority,
            vault: self.wallet.vault,
            destination,
            wallet_signer: self.wallet.wallet_signer,
            token_program: self.token_program,
        })
    }

    pub fn instruction(&self) -> Result<Instruction> {
        Ok(instructions::withdraw(
            &self.wallet.program_id,
            &self.accounts()?,
        ))
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
        payer: Pubkey,
    ) -> Result<Transaction> {
        let ix = self.instruction()?;
        unsigned_transaction(connection, ix, &payer).await
    }
}

pub struct UpdateAuthorityBuilder<'a> {
    wallet: &'a SolanaWallet,
    authority: Option<Pubkey>,
    new_authority: Option<Pubkey>,
}

impl<'a> UpdateAuthorityBuilder<'a> {
    pub fn new(wallet: &'a SolanaWallet) -> Self {
        Self {
            wallet,
            authority: None,
            new_authority: None,
        }
    }

    /// Current authority, must sign
    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_new_authority(mut self, new_authority: Pubkey) -> Self {
        self.new_authority = Some(new_authority);
        self
    }

    pub fn accounts(&self) -> Result<UpdateAuthorityAccounts> {
        Ok(UpdateAuthorityAccounts {
            wallet: self.wallet.address,
            authority: self
                .authority
                .ok_or(WalletSdkError::MissingField("authority"))?,
            new_authority: self
                .new_authority
                .ok_or(WalletSdkError::MissingField("new_authority"))?,
        })
    }

    pub fn instruction(&self) -> Result<Instruction> {
        Ok(instructions::update_authority(
            &self.wallet.program_id,
            &self.accounts()?,
        ))
    }

    pub async fn build_transaction(
        &self,
        connection: &impl SolConnection,
        payer: Pubkey,
    ) -> Result<Transaction> {
        let ix = self.instruction()?;
        unsigned_transaction(connection, ix, &payer).await
    }
}
