//! Utilities for reading & writing the deployments file

use std::{fs, path::Path};

use json::JsonValue;
use starknet::core::types::Felt;

use crate::{
    config::parse_felt,
    constants::{
        CORE_CLASS_HASH_KEY, CORE_CONTRACT_KEY, DEPLOYMENTS_KEY, MARKET_CLASS_HASH_KEY,
        MARKET_CONTRACT_KEY,
    },
    errors::ScriptError,
    types::DeploymentReport,
};

fn get_deployments_json(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the felt stored under `contract_key` in the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &Path,
    contract_key: &str,
) -> Result<Felt, ScriptError> {
    let parsed_json = get_deployments_json(file_path)?;

    let addr = parsed_json[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "no `{contract_key}` entry in {}",
                file_path.display()
            ))
        })?;

    Felt::from_hex(addr).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Records the addresses & class hashes of a deployment, creating the file if
/// needed and keeping any other entries in it
pub fn write_deployments(file_path: &Path, report: &DeploymentReport) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_deployments_json(file_path)?;

    let deployments = &parsed_json[DEPLOYMENTS_KEY];
    if !deployments.is_null() && !deployments.is_object() {
        return Err(ScriptError::WriteDeployments(format!(
            "`{DEPLOYMENTS_KEY}` in {} is not an object",
            file_path.display()
        )));
    }

    for (key, felt) in [
        (CORE_CONTRACT_KEY, report.core.address),
        (MARKET_CONTRACT_KEY, report.market.address),
        (CORE_CLASS_HASH_KEY, report.core.class_hash),
        (MARKET_CLASS_HASH_KEY, report.market.class_hash),
    ] {
        parsed_json[DEPLOYMENTS_KEY][key] = JsonValue::String(format!("{felt:#064x}"));
    }

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Resolves a contract address from an explicit hex argument, falling back to
/// the deployments file
pub fn resolve_address(
    explicit: Option<&str>,
    deployments_path: Option<&Path>,
    contract_key: &str,
) -> Result<Felt, ScriptError> {
    match (explicit, deployments_path) {
        (Some(hex), _) => parse_felt(contract_key, hex),
        (None, Some(path)) => parse_addr_from_deployments_file(path, contract_key),
        (None, None) => Err(ScriptError::Config(format!(
            "no address given for `{contract_key}` and no deployments file to read it from"
        ))),
    }
}
