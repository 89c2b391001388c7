//! Validated configuration, built once from the command line arguments

use std::path::PathBuf;

use starknet::core::types::Felt;
use url::Url;

use crate::{
    cli::{DeployArgs, MarketArgs, NetworkArgs},
    errors::ScriptError,
    types::{
        CoreConstructorArgs, MarketRecord, MarketState, MarketString, MarketType, MetadataType,
    },
};

/// Parses a hex-encoded felt, naming the offending argument on failure
pub fn parse_felt(name: &str, hex: &str) -> Result<Felt, ScriptError> {
    Felt::from_hex(hex).map_err(|e| ScriptError::Config(format!("{name} {hex:?}: {e}")))
}

/// Where and as whom to send transactions
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub rpc_url: Url,
    pub account_address: Felt,
    pub private_key: Felt,
}

impl TryFrom<&NetworkArgs> for NetworkConfig {
    type Error = ScriptError;

    fn try_from(args: &NetworkArgs) -> Result<Self, Self::Error> {
        let rpc_url = Url::parse(&args.rpc_url)
            .map_err(|e| ScriptError::Config(format!("rpc url {:?}: {}", args.rpc_url, e)))?;

        Ok(Self {
            rpc_url,
            account_address: parse_felt("account address", &args.address)?,
            private_key: parse_felt("private key", &args.private_key)?,
        })
    }
}

/// The market registered in the Core contract.
///
/// Strings are packed here so that an unencodable title fails before
/// anything is sent to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub id: u64,
    pub title: MarketString,
    pub metadata: MarketString,
    pub metadata_type: MetadataType,
    pub state: MarketState,
    pub market_type: MarketType,
}

impl MarketConfig {
    /// The `register_market` argument for the market deployed at `addr`
    pub fn record(&self, addr: Felt) -> MarketRecord {
        MarketRecord {
            id: self.id,
            title: self.title.clone(),
            metadata: self.metadata.clone(),
            metadata_type: self.metadata_type,
            state: self.state,
            m_type: self.market_type,
            addr,
        }
    }
}

impl TryFrom<&MarketArgs> for MarketConfig {
    type Error = ScriptError;

    fn try_from(args: &MarketArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            id: args.market_id,
            title: MarketString::new(&args.market_title)?,
            metadata: MarketString::new(&args.market_metadata)?,
            metadata_type: MetadataType::Http,
            state: MarketState::Active,
            market_type: MarketType::Basic,
        })
    }
}

/// Everything the deployment pipeline needs besides the network connection
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    /// Directory holding the Scarb build artifacts
    pub artifacts_dir: PathBuf,
    /// Scarb package name prefixing the artifact files
    pub package: String,
    pub core: CoreConstructorArgs,
    pub market: MarketConfig,
}

/// Configuration of the `deploy` command
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    pub network: NetworkConfig,
    pub deployment: DeploymentConfig,
    pub salt: Option<Felt>,
    pub deployments_path: Option<PathBuf>,
}

fn check_percentage(name: &str, value: u64) -> Result<u64, ScriptError> {
    if value > 100 {
        return Err(ScriptError::Config(format!(
            "{name} must be at most 100, got {value}"
        )));
    }
    Ok(value)
}

impl TryFrom<DeployArgs> for ScriptConfig {
    type Error = ScriptError;

    fn try_from(args: DeployArgs) -> Result<Self, Self::Error> {
        let core = CoreConstructorArgs {
            payout_token: parse_felt("payout token", &args.payout_token)?,
            task_fee_percentage: check_percentage("task fee percentage", args.task_fee_percentage)?,
            reward_percentage: check_percentage("reward percentage", args.reward_percentage)?,
        };

        Ok(Self {
            network: NetworkConfig::try_from(&args.network)?,
            deployment: DeploymentConfig {
                artifacts_dir: PathBuf::from(args.artifacts_path),
                package: args.package,
                core,
                market: MarketConfig::try_from(&args.market)?,
            },
            salt: args.salt.as_deref().map(|s| parse_felt("salt", s)).transpose()?,
            deployments_path: args.deployments_path.map(PathBuf::from),
        })
    }
}
