//! Type tags carried in front of every account record and instruction payload.
//!
//! Each tag is the first 8 bytes of `sha256("account:<Type>")` or
//! `sha256("global:<instruction>")`. They are fixed once the program is
//! deployed and must never collide.

/// Length of every discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Implemented by account records stored behind an 8-byte tag.
pub trait AccountDiscriminator {
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN];

    /// Exact comparison of the leading tag. Shorter input never matches.
    fn matches_discriminator(data: &[u8]) -> bool {
        data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == Self::DISCRIMINATOR
    }
}

/// Instruction opcodes of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionDiscriminator {
    Initialize,
    UpdateAuthority,
    Deposit,
    Withdraw,
}

impl InstructionDiscriminator {
    pub const ALL: [InstructionDiscriminator; 4] = [
        InstructionDiscriminator::Initialize,
        InstructionDiscriminator::UpdateAuthority,
        InstructionDiscriminator::Deposit,
        InstructionDiscriminator::Withdraw,
    ];

    pub const fn bytes(self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            InstructionDiscriminator::Initialize => [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed],
            InstructionDiscriminator::UpdateAuthority => {
                [0x20, 0x2e, 0x40, 0x1c, 0x95, 0x4b, 0xf3, 0x58]
            },
            InstructionDiscriminator::Deposit => [0xf2, 0x23, 0xc6, 0x89, 0x52, 0xe1, 0xf2, 0xb6],
            InstructionDiscriminator::Withdraw => [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22],
        }
    }

    /// Instruction name as it appears in the program's sighash preimage.
    pub const fn name(self) -> &'static str {
        match self {
            InstructionDiscriminator::Initialize => "initialize",
            InstructionDiscriminator::UpdateAuthority => "update_authority",
            InstructionDiscriminator::Deposit => "deposit",
            InstructionDiscriminator::Withdraw => "withdraw",
        }
    }

    pub fn from_bytes(bytes: &[u8; DISCRIMINATOR_LEN]) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.bytes() == *bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Wallet;
    use sha2::{Digest, Sha256};

    fn sighash(preimage: &str) -> [u8; 8] {
        let hash = Sha256::digest(preimage.as_bytes());
        let mut out = [0u8; 8];
        out.copy_from_slice(&hash[..8]);
        out
    }

    #[test]
    fn instruction_tags_match_sighash() {
        for d in InstructionDiscriminator::ALL {
            assert_eq!(d.bytes(), sighash(&format!("global:{}", d.name())), "{:?}", d);
        }
    }

    #[test]
    fn wallet_tag_matches_sighash() {
        assert_eq!(Wallet::DISCRIMINATOR, sighash("account:Wallet"));
    }

    #[test]
    fn tags_are_distinct() {
        let mut all: Vec<[u8; 8]> = InstructionDiscriminator::ALL
            .iter()
            .map(|d| d.bytes())
            .collect();
        all.push(Wallet::DISCRIMINATOR);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn from_bytes_requires_exact_match() {
        for d in InstructionDiscriminator::ALL {
            assert_eq!(InstructionDiscriminator::from_bytes(&d.bytes()), Some(d));
        }

        let mut almost = InstructionDiscriminator::Deposit.bytes();
        almost[7] ^= 0x01;
        assert_eq!(InstructionDiscriminator::from_bytes(&almost), None);
    }

    #[test]
    fn short_data_never_matches() {
        assert!(!Wallet::matches_discriminator(&Wallet::DISCRIMINATOR[..7]));
        assert!(Wallet::matches_discriminator(&Wallet::DISCRIMINATOR));
    }
}
