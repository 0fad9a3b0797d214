// Example: Fetching wallet records
//
// Usage: cargo run --example fetch_wallet -- <RPC_URL> <WALLET>...

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_wallet_sdk::{fetch_wallets_with_config, FetchConfig, SolanaWallet, WalletJson};
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://api.devnet.solana.com".to_string());
    let addresses = args
        .map(|a| Pubkey::from_str(&a))
        .collect::<Result<Vec<_>, _>>()?;

    let connection = RpcClient::new(url);
    let config = FetchConfig::default().with_commitment(CommitmentConfig::confirmed());

    let wallets = fetch_wallets_with_config(&connection, &addresses, &config).await?;
    for (address, wallet) in addresses.iter().zip(wallets) {
        match wallet {
            Some(wallet) => {
                let handle = SolanaWallet::from_address(*address);
                println!("{}: {}", address, WalletJson::from(&wallet).to_json_string()?);
                if !handle.matches_state(&wallet) {
                    println!("  (vault does not match derived PDA)");
                }
            },
            None => println!("{}: not found", address),
        }
    }

    Ok(())
}
