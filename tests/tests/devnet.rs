//! End-to-end deployment against a running devnet, e.g.
//! `starknet-devnet --seed 2253143690`.
//!
//! Run with `ARTIFACTS_PATH=<scarb target/dev> cargo test -p tests -- --ignored`.

use std::env;

use conode_scripts::{
    backend::{setup_account, DeploymentBackend, StarknetBackend},
    cli::NetworkArgs,
    config::NetworkConfig,
    constants::{DEVNET_HOST, DEVNET_PORT, PREDEPLOYED_ACCOUNT, PREDEPLOYED_PRIVATE_KEY},
    orchestrator::Orchestrator,
};
use eyre::Result;
use tests::utils::{
    init_tracing, test_deployment_config, ARTIFACTS_PATH_ENV_VAR, DEVNET_RPC_URL_ENV_VAR,
};

#[tokio::test]
#[ignore = "requires a running devnet and compiled artifacts"]
async fn test_devnet_deployment() -> Result<()> {
    init_tracing();
    let artifacts_path = env::var(ARTIFACTS_PATH_ENV_VAR)?;
    let rpc_url = env::var(DEVNET_RPC_URL_ENV_VAR)
        .unwrap_or_else(|_| format!("http://{DEVNET_HOST}:{DEVNET_PORT}"));

    let network = NetworkConfig::try_from(&NetworkArgs {
        rpc_url,
        address: PREDEPLOYED_ACCOUNT.to_string(),
        private_key: PREDEPLOYED_PRIVATE_KEY.to_string(),
    })?;
    let account = setup_account(&network).await?;
    let orchestrator = Orchestrator::new(
        StarknetBackend::new(account, None /* salt */),
        test_deployment_config(artifacts_path.as_ref())?,
    );

    let report = orchestrator.run().await?;

    assert!(report.registration.is_confirmed());
    assert_eq!(report.core_deployed_class_hash, report.core.class_hash);
    assert_eq!(
        orchestrator
            .backend()
            .class_hash_at(report.market.address)
            .await?,
        report.market.class_hash
    );
    // The market was registered, so the list is non-empty
    assert_ne!(report.markets.first(), Some(&starknet::core::types::Felt::ZERO));

    Ok(())
}
