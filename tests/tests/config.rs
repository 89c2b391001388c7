use conode_scripts::{
    cli::{DeployArgs, NetworkArgs},
    config::ScriptConfig,
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_REWARD_PERCENTAGE, DEFAULT_TASK_FEE_PERCENTAGE,
        ETH_ADDRESS, PACKAGE_NAME, PREDEPLOYED_ACCOUNT, PREDEPLOYED_PRIVATE_KEY,
    },
    errors::ScriptError,
    types::MarketString,
};
use eyre::Result;
use starknet::core::types::Felt;
use tests::utils::default_market_args;

fn default_deploy_args() -> DeployArgs {
    DeployArgs {
        network: NetworkArgs {
            rpc_url: "http://127.0.0.1:5050".to_string(),
            address: PREDEPLOYED_ACCOUNT.to_string(),
            private_key: PREDEPLOYED_PRIVATE_KEY.to_string(),
        },
        market: default_market_args(),
        artifacts_path: DEFAULT_ARTIFACTS_DIR.to_string(),
        package: PACKAGE_NAME.to_string(),
        payout_token: ETH_ADDRESS.to_string(),
        task_fee_percentage: DEFAULT_TASK_FEE_PERCENTAGE,
        reward_percentage: DEFAULT_REWARD_PERCENTAGE,
        salt: None,
        deployments_path: None,
    }
}

#[test]
fn test_default_config() -> Result<()> {
    let config = ScriptConfig::try_from(default_deploy_args())?;

    assert_eq!(config.network.rpc_url.port(), Some(5050));
    assert_eq!(config.deployment.core.task_fee_percentage, 1);
    assert_eq!(config.deployment.core.reward_percentage, 1);
    assert!(matches!(
        config.deployment.market.title,
        MarketString::DString(_)
    ));
    assert!(config.salt.is_none());
    assert!(config.deployments_path.is_none());
    Ok(())
}

#[test]
fn test_salt_parsing() -> Result<()> {
    let mut args = default_deploy_args();
    args.salt = Some("0x2a".to_string());

    let config = ScriptConfig::try_from(args)?;

    assert_eq!(config.salt, Some(Felt::from(42_u64)));
    Ok(())
}

#[test]
fn test_invalid_config() {
    let mut bad_key = default_deploy_args();
    bad_key.network.private_key = "not hex".to_string();

    let mut bad_url = default_deploy_args();
    bad_url.network.rpc_url = "localhost 5050".to_string();

    let mut bad_fee = default_deploy_args();
    bad_fee.task_fee_percentage = 101;

    for args in [bad_key, bad_url, bad_fee] {
        assert!(matches!(
            ScriptConfig::try_from(args),
            Err(ScriptError::Config(_))
        ));
    }
}

#[test]
fn test_unencodable_title() {
    let mut args = default_deploy_args();
    args.market.market_title = "Marché par défaut".to_string();

    assert!(matches!(
        ScriptConfig::try_from(args),
        Err(ScriptError::CalldataConstruction(_))
    ));
}
