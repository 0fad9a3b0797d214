use solana_sdk::instruction::InstructionError;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};
use solana_wallet_interface::WalletStateError;
use solana_wallet_sdk::error::{custom_error_code, program_error};
use solana_wallet_sdk::state::{lookup, WalletError};
use solana_wallet_sdk::{submit_transaction, SolanaWallet, WalletSdkError};

mod common;
use common::setup_test_context;

#[test]
fn test_lookup_known_and_unknown_codes() {
    let entry = lookup(6000).unwrap();
    assert_eq!(entry.name, "AmountMustBeMoreZero");
    assert_eq!(entry.error, WalletError::AmountMustBeMoreZero);
    assert!(lookup(9999).is_none());
}

#[test]
fn test_from_program_code() {
    assert!(matches!(
        WalletSdkError::from_program_code(6000),
        WalletSdkError::ProgramDefined {
            code: 6000,
            name: "AmountMustBeMoreZero",
            msg: None,
        }
    ));
    assert!(matches!(
        WalletSdkError::from_program_code(9999),
        WalletSdkError::UnknownProgramError(9999)
    ));
}

#[test]
fn test_custom_code_extraction() {
    let custom = TransactionError::InstructionError(0, InstructionError::Custom(6000));
    assert_eq!(custom_error_code(&custom), Some(6000));
    assert!(matches!(
        program_error(&custom),
        Some(WalletSdkError::ProgramDefined { code: 6000, .. })
    ));

    let builtin = TransactionError::InstructionError(0, InstructionError::MissingRequiredSignature);
    assert_eq!(custom_error_code(&builtin), None);
    assert_eq!(custom_error_code(&TransactionError::BlockhashNotFound), None);
    assert!(program_error(&builtin).is_none());
}

#[test]
fn test_state_errors_map_to_account_errors() {
    let address = solana_sdk::pubkey::Pubkey::new_unique();

    assert!(matches!(
        WalletSdkError::from_state_error(address, WalletStateError::DiscriminatorMismatch),
        WalletSdkError::DiscriminatorMismatch(a) if a == address
    ));

    let err = WalletSdkError::from_state_error(
        address,
        WalletStateError::AccountDataTooSmall {
            expected: 82,
            actual: 40,
        },
    );
    assert!(matches!(err, WalletSdkError::InvalidAccountData(msg) if msg.contains("expected 82 bytes, got 40")));

    assert!(matches!(
        WalletSdkError::from_state_error(address, WalletStateError::InvalidInstructionData),
        WalletSdkError::InvalidAccountData(_)
    ));
}

fn signed_tx(payer: &Keypair, blockhash: solana_sdk::hash::Hash) -> Transaction {
    let wallet = SolanaWallet::from_address(solana_sdk::pubkey::Pubkey::new_unique());
    let ix = wallet
        .update_authority()
        .with_authority(payer.pubkey())
        .with_new_authority(solana_sdk::pubkey::Pubkey::new_unique())
        .instruction()
        .unwrap();
    Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], blockhash)
}

#[test_log::test(tokio::test)]
async fn test_submit_success_returns_signature() {
    let context = setup_test_context();
    let payer = Keypair::new();
    let tx = signed_tx(&payer, context.blockhash);

    let signature = submit_transaction(&context, &tx).await.unwrap();
    assert_eq!(signature, tx.signatures[0]);
}

#[test_log::test(tokio::test)]
async fn test_submit_surfaces_program_error() {
    let mut context = setup_test_context();
    context.fail_sends = Some(TransactionError::InstructionError(
        0,
        InstructionError::Custom(6000),
    ));
    let payer = Keypair::new();
    let tx = signed_tx(&payer, context.blockhash);

    let err = submit_transaction(&context, &tx).await.unwrap_err();
    assert!(matches!(
        err,
        WalletSdkError::ProgramDefined {
            name: "AmountMustBeMoreZero",
            ..
        }
    ));
}

#[test_log::test(tokio::test)]
async fn test_submit_unknown_code_is_opaque() {
    let mut context = setup_test_context();
    context.fail_sends = Some(TransactionError::InstructionError(
        0,
        InstructionError::Custom(3012),
    ));
    let payer = Keypair::new();
    let tx = signed_tx(&payer, context.blockhash);

    let err = submit_transaction(&context, &tx).await.unwrap_err();
    assert!(matches!(err, WalletSdkError::UnknownProgramError(3012)));
}

#[test_log::test(tokio::test)]
async fn test_submit_other_failure_is_connection_error() {
    let mut context = setup_test_context();
    context.fail_sends = Some(TransactionError::BlockhashNotFound);
    let payer = Keypair::new();
    let tx = signed_tx(&payer, context.blockhash);

    let err = submit_transaction(&context, &tx).await.unwrap_err();
    assert!(matches!(err, WalletSdkError::Connection(_)));
}
