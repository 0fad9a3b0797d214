//! Program error codes and client-side decode errors.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Custom program errors start at this code.
pub const ERROR_CODE_OFFSET: u32 = 6000;

/// Errors raised by the on-chain program.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum WalletError {
    #[error("AmountMustBeMoreZero")]
    AmountMustBeMoreZero = ERROR_CODE_OFFSET,
}

impl WalletError {
    pub const ALL: [WalletError; 1] = [WalletError::AmountMustBeMoreZero];

    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            WalletError::AmountMustBeMoreZero => "AmountMustBeMoreZero",
        }
    }

    /// Human readable message declared by the program, if any.
    pub const fn msg(self) -> Option<&'static str> {
        match self {
            WalletError::AmountMustBeMoreZero => None,
        }
    }
}

/// Resolved program error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramErrorEntry {
    pub code: u32,
    pub name: &'static str,
    pub msg: Option<&'static str>,
    pub error: WalletError,
}

impl From<WalletError> for ProgramErrorEntry {
    fn from(error: WalletError) -> Self {
        Self {
            code: error.code(),
            name: error.name(),
            msg: error.msg(),
            error,
        }
    }
}

static ERROR_REGISTRY: Lazy<HashMap<u32, ProgramErrorEntry>> = Lazy::new(|| {
    WalletError::ALL
        .into_iter()
        .map(|e| (e.code(), ProgramErrorEntry::from(e)))
        .collect()
});

/// Look up a custom error code raised by the program.
///
/// `None` means the code did not come from this program's error space and
/// must be treated as a generic failure.
pub fn lookup(code: u32) -> Option<&'static ProgramErrorEntry> {
    ERROR_REGISTRY.get(&code)
}

/// Errors produced while decoding account data or instruction payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletStateError {
    #[error("The discriminator for this account is invalid")]
    DiscriminatorMismatch,

    #[error("Account data too small: expected {expected} bytes, got {actual}")]
    AccountDataTooSmall { expected: usize, actual: usize },

    #[error("Invalid instruction data")]
    InvalidInstructionData,
}
