//! The deployment pipeline: deploy Core, deploy a market owned by it,
//! register the market, and read back the registered markets.
//!
//! Each step has a fixed failure policy:
//!
//! | step                        | on failure                          |
//! |-----------------------------|-------------------------------------|
//! | load artifacts              | abort                               |
//! | declare & deploy Core       | abort                               |
//! | look up Core class hash     | abort                               |
//! | declare & deploy market     | abort                               |
//! | encode registration         | abort                               |
//! | register & confirm market   | log, record in report, and continue |
//! | query registered markets    | abort                               |

use starknet::core::types::Felt;
use tracing::{debug, error, info};

use crate::{
    artifacts::ContractArtifact,
    backend::DeploymentBackend,
    calldata::{format_felts, CalldataSerializable},
    config::DeploymentConfig,
    constants::{
        CORE_CONTRACT_NAME, GET_ALL_MARKETS_FN_NAME, MARKET_CONTRACT_NAME,
        REGISTER_MARKET_FN_NAME,
    },
    errors::ScriptError,
    types::{DeployedContract, DeploymentReport, MarketConstructorArgs, RegistrationOutcome},
};

/// Runs the deployment pipeline against a [`DeploymentBackend`]
pub struct Orchestrator<B> {
    backend: B,
    config: DeploymentConfig,
}

impl<B: DeploymentBackend> Orchestrator<B> {
    pub fn new(backend: B, config: DeploymentConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// Loads the Core & DefaultMarket artifacts from the configured directory
    pub fn load_artifacts(&self) -> Result<(ContractArtifact, ContractArtifact), ScriptError> {
        debug!(
            "Loading artifacts from {}...",
            self.config.artifacts_dir.display()
        );
        let core = ContractArtifact::load(
            &self.config.artifacts_dir,
            &self.config.package,
            CORE_CONTRACT_NAME,
        )?;
        let market = ContractArtifact::load(
            &self.config.artifacts_dir,
            &self.config.package,
            MARKET_CONTRACT_NAME,
        )?;
        Ok((core, market))
    }

    /// Runs every step, loading the artifacts from disk
    pub async fn run(&self) -> Result<DeploymentReport, ScriptError> {
        let (core_artifact, market_artifact) = self.load_artifacts()?;
        self.deploy_and_register(&core_artifact, &market_artifact)
            .await
    }

    /// Runs every step after artifact loading
    pub async fn deploy_and_register(
        &self,
        core_artifact: &ContractArtifact,
        market_artifact: &ContractArtifact,
    ) -> Result<DeploymentReport, ScriptError> {
        let core = self.deploy_core(core_artifact).await?;
        let core_deployed_class_hash = self.backend.class_hash_at(core.address).await?;
        info!(
            "Core contract class hash: {:#064x}\n\
            Core contract deployed at: {:#064x}\n\
            Deployed class hash: {:#064x}",
            core.class_hash, core.address, core_deployed_class_hash,
        );

        // The market constructor needs the Core address, so it can only be
        // deployed once the Core deployment has returned
        let market = self.deploy_market(market_artifact, core.address).await?;
        info!(
            "Market contract class hash: {:#064x}\n\
            Market contract deployed at: {:#064x}",
            market.class_hash, market.address,
        );

        let registration_calldata = self.config.market.record(market.address).to_calldata();
        info!(
            "Registration calldata: {}",
            format_felts(&registration_calldata)
        );

        let registration =
            register_market(&self.backend, core.address, registration_calldata.clone()).await;

        let markets = query_markets(&self.backend, core.address).await?;

        Ok(DeploymentReport {
            core,
            core_deployed_class_hash,
            market,
            registration_calldata,
            registration,
            markets,
        })
    }

    /// Declares & deploys the Core contract
    pub async fn deploy_core(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeployedContract, ScriptError> {
        self.backend
            .declare_and_deploy(artifact, self.config.core.to_calldata())
            .await
    }

    /// Declares & deploys a market contract owned by the Core contract at `core_address`
    pub async fn deploy_market(
        &self,
        artifact: &ContractArtifact,
        core_address: Felt,
    ) -> Result<DeployedContract, ScriptError> {
        let constructor_args = MarketConstructorArgs {
            core_address,
            market_type: self.config.market.market_type,
        };
        self.backend
            .declare_and_deploy(artifact, constructor_args.to_calldata())
            .await
    }
}

/// Registers a market in the Core contract and waits for the transaction to
/// be accepted.
///
/// Never fails: an error is logged and returned as
/// [`RegistrationOutcome::Failed`] so that the caller can still inspect the
/// Core contract's state.
pub async fn register_market<B: DeploymentBackend>(
    backend: &B,
    core_address: Felt,
    calldata: Vec<Felt>,
) -> RegistrationOutcome {
    let mut submitted = None;
    let result = async {
        // Fetched right before sending, after both deployments bumped it
        let nonce = backend.nonce().await?;
        let transaction_hash = backend
            .invoke(core_address, REGISTER_MARKET_FN_NAME, calldata, nonce)
            .await?;
        submitted = Some(transaction_hash);
        info!("Market registered, tx hash: {:#064x}", transaction_hash);

        backend.wait_for_confirmation(transaction_hash).await?;
        info!("Transaction confirmed");
        Ok::<_, ScriptError>(transaction_hash)
    }
    .await;

    match result {
        Ok(transaction_hash) => RegistrationOutcome::Confirmed { transaction_hash },
        Err(e) => {
            error!("Failed to register market: {}", e);
            RegistrationOutcome::Failed {
                transaction_hash: submitted,
                reason: e.to_string(),
            }
        }
    }
}

/// Reads the markets registered in the Core contract
pub async fn query_markets<B: DeploymentBackend>(
    backend: &B,
    core_address: Felt,
) -> Result<Vec<Felt>, ScriptError> {
    info!("Returning registered markets...");
    let markets = backend
        .call(core_address, GET_ALL_MARKETS_FN_NAME, vec![])
        .await?;
    info!("{}", format_felts(&markets));
    Ok(markets)
}
