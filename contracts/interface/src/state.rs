use borsh::BorshDeserialize;
use solana_program::pubkey::Pubkey;

use crate::discriminator::{AccountDiscriminator, DISCRIMINATOR_LEN};
use crate::error::WalletStateError;

/// Wallet record owned by the program.
///
/// Layout (82 bytes, little-endian, no padding):
/// - `[0..8]`   discriminator
/// - `[8..40]`  authority
/// - `[40..72]` vault
/// - `[72..80]` withdrawn
/// - `[80]`     signer_bump
/// - `[81]`     vault_bump
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Wallet {
    /// Identity allowed to withdraw and rotate the authority
    pub authority: Pubkey,

    /// Token account holding the deposited funds (PDA: ["vault", wallet])
    pub vault: Pubkey,

    /// Cumulative amount withdrawn, saturating
    pub withdrawn: u64,

    /// Bump of the signer PDA (["signer", wallet])
    pub signer_bump: u8,

    /// Bump of the vault PDA
    pub vault_bump: u8,
}

impl AccountDiscriminator for Wallet {
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [0x18, 0x59, 0x3b, 0x8b, 0x51, 0x9a, 0xe8, 0x5f];
}

impl Wallet {
    /// Field bytes after the discriminator: 32 + 32 + 8 + 1 + 1
    pub const DATA_LEN: usize = 74;

    /// Discriminator plus fields.
    pub const LEN: usize = DISCRIMINATOR_LEN + Self::DATA_LEN;

    /// Bytes the program allocates: 8 + size_of::<Wallet>() with the struct padded to 80.
    pub const SPACE: usize = DISCRIMINATOR_LEN + 80;

    /// Decode raw account data.
    ///
    /// The tag is checked before any field is read. Bytes past [`Wallet::LEN`]
    /// are ignored since the program allocates [`Wallet::SPACE`].
    pub fn decode(data: &[u8]) -> Result<Self, WalletStateError> {
        if !Self::matches_discriminator(data) {
            return Err(WalletStateError::DiscriminatorMismatch);
        }

        if data.len() < Self::LEN {
            return Err(WalletStateError::AccountDataTooSmall {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        // fixed-width fields: running out of bytes is the only borsh failure
        let mut fields = &data[DISCRIMINATOR_LEN..Self::LEN];
        Self::deserialize(&mut fields).map_err(|_| WalletStateError::AccountDataTooSmall {
            expected: Self::LEN,
            actual: data.len(),
        })
    }

    /// Whether `data` carries the wallet tag.
    pub fn is_wallet_data(data: &[u8]) -> bool {
        Self::matches_discriminator(data)
    }
}
