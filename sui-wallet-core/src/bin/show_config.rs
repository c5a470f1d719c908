use anyhow::Context;
use sui_wallet_core::core::faucet::{airdrop_available, faucet_endpoint};
use sui_wallet_core::core::network::BuiltInNetworks;
use sui_wallet_core::{init, resolve, NetworkRepository};

fn main() -> anyhow::Result<()> {
    let settings = init().context("Failed to load settings")?;
    let network_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.default_network.clone());
    let flags = settings
        .feature_flags()
        .context("Failed to read feature flags")?;

    let network = resolve(&network_id, flags.as_ref());
    let remote = flags.as_ref().and_then(|f| f.network(&network_id));

    println!("Sui Wallet Core Network Configuration:\n");
    println!("  Requested Network: {}", network_id);
    println!(
        "  Feature Flags: {}",
        settings
            .feature_flags_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  Known Networks: {}",
        BuiltInNetworks
            .get_networks(true)
            .iter()
            .map(|n| n.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if airdrop_available(&network_id) {
        println!("  Faucet: {}", faucet_endpoint(&network_id, remote, &network));
    } else {
        println!("  Faucet: (not available)");
    }
    println!("\n{}", serde_json::to_string_pretty(&network)?);
    Ok(())
}
