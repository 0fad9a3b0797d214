use log::trace;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_wallet_interface::{
    DepositAccounts, InitializeAccounts, ToAccountMetas, UpdateAuthorityAccounts,
    WalletInstruction, WithdrawAccounts,
};

/// A program call: the variant, its account roles and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletCall {
    Initialize(InitializeAccounts),
    UpdateAuthority(UpdateAuthorityAccounts),
    Deposit {
        accounts: DepositAccounts,
        amount: u64,
    },
    Withdraw(WithdrawAccounts),
}

impl WalletCall {
    pub fn instruction(&self) -> WalletInstruction {
        match self {
            WalletCall::Initialize(_) => WalletInstruction::Initialize,
            WalletCall::UpdateAuthority(_) => WalletInstruction::UpdateAuthority,
            WalletCall::Deposit { amount, .. } => WalletInstruction::Deposit { amount: *amount },
            WalletCall::Withdraw(_) => WalletInstruction::Withdraw,
        }
    }
}

impl ToAccountMetas for WalletCall {
    fn to_account_metas(&self) -> Vec<solana_sdk::instruction::AccountMeta> {
        match self {
            WalletCall::Initialize(accounts) => accounts.to_account_metas(),
            WalletCall::UpdateAuthority(accounts) => accounts.to_account_metas(),
            WalletCall::Deposit { accounts, .. } => accounts.to_account_metas(),
            WalletCall::Withdraw(accounts) => accounts.to_account_metas(),
        }
    }
}

/// Build the ledger instruction for `call`, addressed to `program_id`.
pub fn build(program_id: &Pubkey, call: &WalletCall) -> Instruction {
    let instruction = call.instruction();
    trace!(
        "building {} instruction for {}",
        instruction.discriminator().name(),
        program_id
    );

    Instruction {
        program_id: *program_id,
        accounts: call.to_account_metas(),
        data: instruction.pack(),
    }
}

pub fn initialize(program_id: &Pubkey, accounts: &InitializeAccounts) -> Instruction {
    build(program_id, &WalletCall::Initialize(*accounts))
}

pub fn update_authority(program_id: &Pubkey, accounts: &UpdateAuthorityAccounts) -> Instruction {
    build(program_id, &WalletCall::UpdateAuthority(*accounts))
}

pub fn deposit(program_id: &Pubkey, accounts: &DepositAccounts, amount: u64) -> Instruction {
    build(
        program_id,
        &WalletCall::Deposit {
            accounts: *accounts,
            amount,
        },
    )
}

pub fn withdraw(program_id: &Pubkey, accounts: &WithdrawAccounts) -> Instruction {
    build(program_id, &WalletCall::Withdraw(*accounts))
}
