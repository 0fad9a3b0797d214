use solana_sdk::pubkey::Pubkey;
use solana_wallet_sdk::state::Wallet;
use solana_wallet_sdk::{WalletJson, WalletSdkError};

mod common;
use common::{sample_wallet, wallet_bytes};

#[test]
fn test_json_round_trip() -> anyhow::Result<()> {
    let wallet = sample_wallet(3);
    let json = WalletJson::from(&wallet);

    assert_eq!(json.authority, wallet.authority.to_string());
    assert_eq!(json.vault, wallet.vault.to_string());
    assert_eq!(json.withdrawn, 3000);

    let back = Wallet::try_from(json)?;
    assert_eq!(back, wallet);
    Ok(())
}

#[test]
fn test_json_string_round_trip() -> anyhow::Result<()> {
    let wallet = sample_wallet(9);
    let s = WalletJson::from(&wallet).to_json_string()?;

    let value: serde_json::Value = serde_json::from_str(&s)?;
    assert_eq!(value["withdrawn"], 9000);
    assert_eq!(value["signer_bump"], 246);
    assert_eq!(value["vault_bump"], 241);
    assert_eq!(value["authority"], wallet.authority.to_string());

    let back = Wallet::try_from(WalletJson::from_json_str(&s)?)?;
    assert_eq!(back, wallet);
    Ok(())
}

#[test]
fn test_decoded_bytes_match_json_view() -> anyhow::Result<()> {
    let wallet = sample_wallet(5);
    let decoded = Wallet::decode(&wallet_bytes(&wallet))?;
    assert_eq!(WalletJson::from(&decoded), WalletJson::from(&wallet));
    Ok(())
}

#[test]
fn test_json_rejects_bad_address() {
    let json = WalletJson {
        authority: "not-a-key".to_string(),
        vault: Pubkey::new_unique().to_string(),
        withdrawn: 0,
        signer_bump: 1,
        vault_bump: 2,
    };
    let err = Wallet::try_from(json).unwrap_err();
    assert!(matches!(err, WalletSdkError::InvalidJson(msg) if msg.starts_with("authority")));
}

#[test]
fn test_json_rejects_out_of_range_bump() {
    let s = r#"{"authority":"11111111111111111111111111111111","vault":"11111111111111111111111111111111","withdrawn":0,"signer_bump":256,"vault_bump":0}"#;
    assert!(matches!(
        WalletJson::from_json_str(s),
        Err(WalletSdkError::InvalidJson(_))
    ));
}
