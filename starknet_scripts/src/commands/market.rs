//! Scripts operating on already-deployed contracts

use std::path::PathBuf;

use tracing::debug;

use crate::{
    backend::{setup_account, StarknetBackend},
    calldata::{format_felts, CalldataSerializable},
    cli::{ListMarketsArgs, RegisterMarketArgs},
    config::{MarketConfig, NetworkConfig},
    constants::{CORE_CONTRACT_KEY, MARKET_CONTRACT_KEY},
    errors::ScriptError,
    orchestrator::{query_markets, register_market},
    types::RegistrationOutcome,
    utils::resolve_address,
};

/// Registers a market and lists the markets afterwards.
///
/// As in `deploy`, a failed registration does not prevent the listing.
pub async fn register(args: RegisterMarketArgs) -> Result<RegistrationOutcome, ScriptError> {
    let network = NetworkConfig::try_from(&args.network)?;
    let market = MarketConfig::try_from(&args.market)?;
    let deployments_path = args.deployments_path.map(PathBuf::from);

    let core_address = resolve_address(
        args.core_address.as_deref(),
        deployments_path.as_deref(),
        CORE_CONTRACT_KEY,
    )?;
    let market_address = resolve_address(
        args.market_address.as_deref(),
        deployments_path.as_deref(),
        MARKET_CONTRACT_KEY,
    )?;

    debug!("Setting up account...");
    let backend = StarknetBackend::new(setup_account(&network).await?, None /* salt */);

    let calldata = market.record(market_address).to_calldata();
    debug!("Registration calldata: {}", format_felts(&calldata));

    let outcome = register_market(&backend, core_address, calldata).await;
    query_markets(&backend, core_address).await?;

    Ok(outcome)
}

pub async fn list(args: ListMarketsArgs) -> Result<(), ScriptError> {
    let network = NetworkConfig::try_from(&args.network)?;
    let deployments_path = args.deployments_path.map(PathBuf::from);
    let core_address = resolve_address(
        args.core_address.as_deref(),
        deployments_path.as_deref(),
        CORE_CONTRACT_KEY,
    )?;

    debug!("Setting up account...");
    let backend = StarknetBackend::new(setup_account(&network).await?, None /* salt */);

    query_markets(&backend, core_address).await.map(|_| ())
}
