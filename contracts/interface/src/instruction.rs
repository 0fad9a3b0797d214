//! solana-wallet Instruction Definitions
//!
//! Payload: `[8-byte discriminator][borsh args]`. Accounts are read by the
//! program positionally, so every role struct emits its metas in the order
//! listed on its variant.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::AccountMeta;
use solana_program::pubkey::Pubkey;

use crate::discriminator::{InstructionDiscriminator, DISCRIMINATOR_LEN};
use crate::error::WalletStateError;

/// Arguments of `deposit`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositArgs {
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletInstruction {
    /// Create a wallet record and its vault token account
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Wallet account (new keypair)
    /// 1. `[]` Authority
    /// 2. `[writable, signer]` Payer
    /// 3. `[]` Wallet signer PDA (["signer", wallet])
    /// 4. `[]` Mint
    /// 5. `[writable]` Vault PDA (["vault", wallet])
    /// 6. `[]` Token program
    /// 7. `[]` System program
    /// 8. `[]` Rent sysvar
    Initialize,

    /// Replace the wallet authority
    ///
    /// Accounts:
    /// 0. `[writable]` Wallet account
    /// 1. `[signer]` Current authority
    /// 2. `[]` New authority
    UpdateAuthority,

    /// Transfer tokens from `source` into the vault
    ///
    /// Accounts:
    /// 0. `[]` Wallet account
    /// 1. `[signer]` Authority of the source token account
    /// 2. `[writable]` Source token account
    /// 3. `[writable]` Vault
    /// 4. `[]` Token program
    Deposit { amount: u64 },

    /// Drain the vault into `destination`
    ///
    /// Accounts:
    /// 0. `[writable]` Wallet account
    /// 1. `[signer]` Authority
    /// 2. `[writable]` Vault
    /// 3. `[writable]` Destination token account
    /// 4. `[]` Wallet signer PDA
    /// 5. `[]` Token program
    Withdraw,
}

impl WalletInstruction {
    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            WalletInstruction::Initialize => InstructionDiscriminator::Initialize,
            WalletInstruction::UpdateAuthority => InstructionDiscriminator::UpdateAuthority,
            WalletInstruction::Deposit { .. } => InstructionDiscriminator::Deposit,
            WalletInstruction::Withdraw => InstructionDiscriminator::Withdraw,
        }
    }

    /// Serialize into instruction data.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = self.discriminator().bytes().to_vec();
        match self {
            // borsh encodes the single u64 field as 8 LE bytes
            WalletInstruction::Deposit { amount } => data.extend_from_slice(&amount.to_le_bytes()),
            WalletInstruction::Initialize
            | WalletInstruction::UpdateAuthority
            | WalletInstruction::Withdraw => {},
        }
        data
    }

    /// Parse instruction data. Trailing bytes after the arguments are ignored,
    /// as the program does.
    pub fn unpack(input: &[u8]) -> Result<Self, WalletStateError> {
        if input.len() < DISCRIMINATOR_LEN {
            return Err(WalletStateError::InvalidInstructionData);
        }
        let (tag, mut rest) = input.split_at(DISCRIMINATOR_LEN);
        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        bytes.copy_from_slice(tag);

        match InstructionDiscriminator::from_bytes(&bytes) {
            Some(InstructionDiscriminator::Initialize) => Ok(WalletInstruction::Initialize),
            Some(InstructionDiscriminator::UpdateAuthority) => Ok(WalletInstruction::UpdateAuthority),
            Some(InstructionDiscriminator::Deposit) => {
                let args = DepositArgs::deserialize(&mut rest)
                    .map_err(|_| WalletStateError::InvalidInstructionData)?;
                Ok(WalletInstruction::Deposit {
                    amount: args.amount,
                })
            },
            Some(InstructionDiscriminator::Withdraw) => Ok(WalletInstruction::Withdraw),
            None => Err(WalletStateError::InvalidInstructionData),
        }
    }
}

/// Account roles of an instruction, in wire order.
pub trait ToAccountMetas {
    fn to_account_metas(&self) -> Vec<AccountMeta>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeAccounts {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub wallet_signer: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent: Pubkey,
}

impl ToAccountMetas for InitializeAccounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.wallet, true),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.wallet_signer, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.rent, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAuthorityAccounts {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub new_authority: Pubkey,
}

impl ToAccountMetas for UpdateAuthorityAccounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.wallet, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(self.new_authority, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositAccounts {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub source: Pubkey,
    pub vault: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for DepositAccounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.wallet, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new(self.source, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawAccounts {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub destination: Pubkey,
    pub wallet_signer: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for WithdrawAccounts {
    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.wallet, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.destination, false),
            AccountMeta::new_readonly(self.wallet_signer, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}
