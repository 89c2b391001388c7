//! Script to deploy the Core & DefaultMarket contracts and register the market

use tracing::{debug, info, warn};

use crate::{
    backend::{setup_account, StarknetBackend},
    cli::DeployArgs,
    config::ScriptConfig,
    errors::ScriptError,
    orchestrator::Orchestrator,
    types::{DeploymentReport, RegistrationOutcome},
    utils::write_deployments,
};

pub async fn deploy(args: DeployArgs) -> Result<DeploymentReport, ScriptError> {
    let ScriptConfig {
        network,
        deployment,
        salt,
        deployments_path,
    } = ScriptConfig::try_from(args)?;

    // Setup account
    debug!("Setting up account...");
    let account = setup_account(&network).await?;
    let orchestrator = Orchestrator::new(StarknetBackend::new(account, salt), deployment);

    let report = orchestrator.run().await?;

    match &report.registration {
        RegistrationOutcome::Confirmed { transaction_hash } => info!(
            "Deployment complete!\n\
            Core contract address: {:#064x}\n\
            Market contract address: {:#064x}\n\
            Registration transaction hash: {:#064x}\n",
            report.core.address, report.market.address, transaction_hash,
        ),
        RegistrationOutcome::Failed { reason, .. } => warn!(
            "Contracts deployed, but the market was not registered: {}",
            reason
        ),
    }

    if let Some(path) = deployments_path {
        debug!("Writing deployments to {}...", path.display());
        write_deployments(&path, &report)?;
    }

    Ok(report)
}
