//! solana-wallet Interface
//!
//! Binary layouts shared between the on-chain program and its clients:
//! account records, instruction payloads, account role lists and the
//! program's custom error codes.

pub mod discriminator;
pub mod error;
pub mod instruction;
pub mod state;

pub use discriminator::{AccountDiscriminator, InstructionDiscriminator, DISCRIMINATOR_LEN};
pub use error::{lookup, ProgramErrorEntry, WalletError, WalletStateError, ERROR_CODE_OFFSET};
pub use instruction::{
    DepositAccounts, DepositArgs, InitializeAccounts, ToAccountMetas, UpdateAuthorityAccounts,
    WalletInstruction, WithdrawAccounts,
};
pub use state::Wallet;

solana_program::declare_id!("HtzrgxvmkSi3YL6mZ5Csv79TYxW8mqZ5h7k7MZF6fG1v");

/// Seed of the PDA that signs token transfers out of the vault.
pub const SEED_SIGNER: &[u8] = b"signer";

/// Seed of the vault token account PDA.
pub const SEED_VAULT: &[u8] = b"vault";
