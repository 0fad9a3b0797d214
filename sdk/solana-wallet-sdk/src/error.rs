use crate::core::connection::ConnectionError;
use solana_client::client_error::ClientError;
use solana_sdk::instruction::InstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::TransactionError;
use solana_wallet_interface::error::{lookup, WalletStateError};
use thiserror::Error;

/// SDK-specific error types for solana-wallet operations
#[derive(Debug, Error)]
pub enum WalletSdkError {
    /// Connection or RPC error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Account data does not start with the wallet discriminator
    #[error("The discriminator for account {0} is invalid")]
    DiscriminatorMismatch(Pubkey),

    /// Account exists but is owned by another program
    #[error("Account {address} does not belong to this program: expected owner {expected}, got {actual}")]
    OwnershipMismatch {
        address: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },

    /// Invalid account data or deserialization error
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// Custom error raised by the program
    #[error("Program error {code}: {name}")]
    ProgramDefined {
        code: u32,
        name: &'static str,
        msg: Option<&'static str>,
    },

    /// Custom error code outside this program's error space
    #[error("Unknown program error code: {0}")]
    UnknownProgramError(u32),

    /// Structured representation could not be converted
    #[error("Invalid wallet JSON: {0}")]
    InvalidJson(String),

    /// Builder input missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Deposit amount must be greater than zero
    #[error("Amount must be greater than zero")]
    InvalidAmount,
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, WalletSdkError>;

impl WalletSdkError {
    /// Resolve a custom program error code through the program's error registry.
    pub fn from_program_code(code: u32) -> Self {
        match lookup(code) {
            Some(entry) => WalletSdkError::ProgramDefined {
                code: entry.code,
                name: entry.name,
                msg: entry.msg,
            },
            None => WalletSdkError::UnknownProgramError(code),
        }
    }

    /// Map a failed submission, surfacing custom program codes when present.
    pub fn from_connection_error(err: ConnectionError) -> Self {
        let tx_err = match err.downcast_ref::<ClientError>() {
            Some(client_err) => client_err.get_transaction_error(),
            None => err.downcast_ref::<TransactionError>().cloned(),
        };

        match tx_err.as_ref().and_then(custom_error_code) {
            Some(code) => Self::from_program_code(code),
            None => WalletSdkError::Connection(err.to_string()),
        }
    }

    /// Map a codec error for the account at `address`.
    pub fn from_state_error(address: Pubkey, err: WalletStateError) -> Self {
        match err {
            WalletStateError::DiscriminatorMismatch => WalletSdkError::DiscriminatorMismatch(address),
            other => WalletSdkError::InvalidAccountData(format!("{}: {}", address, other)),
        }
    }
}

/// Custom error code carried by a failed transaction, if any.
pub fn custom_error_code(err: &TransactionError) -> Option<u32> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

/// Program error for a failed transaction, if it failed with a custom code.
pub fn program_error(err: &TransactionError) -> Option<WalletSdkError> {
    custom_error_code(err).map(WalletSdkError::from_program_code)
}
