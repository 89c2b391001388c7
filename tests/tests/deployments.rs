use std::fs;

use conode_scripts::{
    constants::{CORE_CLASS_HASH_KEY, CORE_CONTRACT_KEY, MARKET_CONTRACT_KEY},
    errors::ScriptError,
    orchestrator::Orchestrator,
    utils::{parse_addr_from_deployments_file, resolve_address, write_deployments},
};
use eyre::Result;
use starknet::core::types::Felt;
use tempfile::tempdir;
use tests::{
    mock_backend::MockBackend,
    utils::{dummy_artifact, test_deployment_config},
};

async fn mock_report() -> Result<conode_scripts::types::DeploymentReport> {
    let orchestrator = Orchestrator::new(
        MockBackend::new(),
        test_deployment_config("unused".as_ref())?,
    );
    Ok(orchestrator
        .deploy_and_register(&dummy_artifact("Core"), &dummy_artifact("DefaultMarket"))
        .await?)
}

#[tokio::test]
async fn test_write_then_read_deployments() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("deployments.json");
    let report = mock_report().await?;

    write_deployments(&path, &report)?;

    assert_eq!(
        parse_addr_from_deployments_file(&path, CORE_CONTRACT_KEY)?,
        report.core.address
    );
    assert_eq!(
        parse_addr_from_deployments_file(&path, MARKET_CONTRACT_KEY)?,
        report.market.address
    );
    assert_eq!(
        parse_addr_from_deployments_file(&path, CORE_CLASS_HASH_KEY)?,
        report.core.class_hash
    );
    Ok(())
}

#[tokio::test]
async fn test_write_keeps_other_entries() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("deployments.json");
    fs::write(
        &path,
        r#"{ "deployments": { "token_contract": "0x49d3" }, "network": "devnet" }"#,
    )?;

    write_deployments(&path, &mock_report().await?)?;

    let contents: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(contents["network"], "devnet");
    assert_eq!(contents["deployments"]["token_contract"], "0x49d3");
    assert!(contents["deployments"][CORE_CONTRACT_KEY].is_string());
    Ok(())
}

#[test]
fn test_resolve_address() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("deployments.json");
    fs::write(&path, r#"{ "deployments": { "core_contract": "0xc0" } }"#)?;

    // An explicit address wins over the file
    assert_eq!(
        resolve_address(Some("0x1"), Some(path.as_path()), CORE_CONTRACT_KEY)?,
        Felt::ONE
    );
    assert_eq!(
        resolve_address(None, Some(path.as_path()), CORE_CONTRACT_KEY)?,
        Felt::from(0xc0_u64)
    );
    assert!(matches!(
        resolve_address(None, Some(path.as_path()), MARKET_CONTRACT_KEY),
        Err(ScriptError::ReadDeployments(_))
    ));
    assert!(matches!(
        resolve_address(None, None, CORE_CONTRACT_KEY),
        Err(ScriptError::Config(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_write_rejects_malformed_deployments_entry() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("deployments.json");
    let contents = r#"{"deployments":"legacy-string","other":1}"#;
    fs::write(&path, contents)?;

    let res = write_deployments(&path, &mock_report().await?);

    assert!(matches!(res, Err(ScriptError::WriteDeployments(_))));
    // The file is left untouched
    assert_eq!(fs::read_to_string(&path)?, contents);
    Ok(())
}
