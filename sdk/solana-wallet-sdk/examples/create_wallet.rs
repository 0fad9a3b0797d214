// Example: Creating a wallet and depositing into its vault
//
// 1. Generate the wallet keypair
// 2. Derive the signer and vault PDAs
// 3. Build the initialize and deposit transactions

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_wallet_sdk::SolanaWallet;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. The wallet record lives at a fresh keypair address
    let wallet_keypair = Keypair::new();
    let payer = Pubkey::new_unique(); // Replace with actual payer
    let mint = Pubkey::new_unique(); // Replace with actual mint

    // 2. Build the create instruction
    let builder = SolanaWallet::create()
        .with_wallet(wallet_keypair.pubkey())
        .with_payer(payer)
        .with_mint(mint);

    let handle = builder.wallet_handle()?;
    println!("Creating wallet:");
    println!("  Wallet: {}", handle.address);
    println!("  Signer PDA: {} (bump {})", handle.wallet_signer, handle.signer_bump);
    println!("  Vault PDA: {} (bump {})", handle.vault, handle.vault_bump);

    let ix = builder.instruction()?;
    println!("  Initialize data: {:02x?}", ix.data);

    // 3. Deposit from the payer's associated token account
    let deposit = handle
        .deposit()
        .with_authority(payer)
        .with_mint(mint)
        .with_amount(1_000)
        .instruction()?;
    println!("  Deposit data: {:02x?}", deposit.data);

    // In a real application, you would:
    // let connection = RpcClient::new("https://api.devnet.solana.com".to_string());
    // let mut tx = builder.build_transaction(&connection).await?;
    // tx.sign(&[&payer_keypair, &wallet_keypair], tx.message.recent_blockhash);
    // solana_wallet_sdk::submit_transaction(&connection, &tx).await?;

    Ok(())
}
