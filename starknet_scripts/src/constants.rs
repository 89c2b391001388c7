//! Constants used in the deploy scripts

use std::time::Duration;

/// The port the local devnet node listens on
pub const DEVNET_PORT: u16 = 5050;

/// The host the local devnet node listens on
pub const DEVNET_HOST: &str = "127.0.0.1";

/// The seed the local devnet is started with (`starknet-devnet --seed`).
///
/// The predeployed account and key below are derived from it.
pub const DEVNET_SEED: u64 = 2253143690;

/// Address of the first predeployed devnet account for [`DEVNET_SEED`]
pub const PREDEPLOYED_ACCOUNT: &str =
    "0x0343fc2ae5175a17fe413a09212282e1dd5bc05e58b2f258f4f3de827581247c";

/// Private key of the first predeployed devnet account for [`DEVNET_SEED`]
pub const PREDEPLOYED_PRIVATE_KEY: &str = "0x00000000000000000000000a713968afc767b35dd56887ea3e310f8";

/// The ETH token contract, used as the payout token of the Core contract
pub const ETH_ADDRESS: &str = "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7";

/// Default task fee percentage passed to the Core constructor
pub const DEFAULT_TASK_FEE_PERCENTAGE: u64 = 1;

/// Default reward percentage passed to the Core constructor
pub const DEFAULT_REWARD_PERCENTAGE: u64 = 1;

/// Default directory containing the compiled Scarb artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "../target/dev";

/// Name of the Scarb package the contracts are compiled from
pub const PACKAGE_NAME: &str = "conode_protocol";

/// Name of the Core (market registry) contract
pub const CORE_CONTRACT_NAME: &str = "Core";

/// Name of the default market contract
pub const MARKET_CONTRACT_NAME: &str = "DefaultMarket";

/// Extension of the Sierra contract class artifact
pub const SIERRA_FILE_EXTENSION: &str = "contract_class.json";

/// Extension of the CASM compiled contract class artifact
pub const CASM_FILE_EXTENSION: &str = "compiled_contract_class.json";

/// Title of the market registered after deployment
pub const DEFAULT_MARKET_TITLE: &str = "Default Market 1";

/// Metadata reference of the market registered after deployment
pub const DEFAULT_MARKET_METADATA: &str = "https://www.yahoo.com";

/// Identifier of the market registered after deployment
pub const DEFAULT_MARKET_ID: u64 = 0;

/// Entry point on the Core contract registering a market
pub const REGISTER_MARKET_FN_NAME: &str = "register_market";

/// Entry point on the Core contract listing registered markets
pub const GET_ALL_MARKETS_FN_NAME: &str = "get_all_markets";

/// The maximum number of characters packed into a single Cairo short string
pub const SHORT_STRING_MAX_LEN: usize = 31;

/// The interval between transaction receipt queries
pub const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How long to wait for a transaction to be accepted before giving up
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The Core contract address key in the `deployments.json` file
pub const CORE_CONTRACT_KEY: &str = "core_contract";

/// The market contract address key in the `deployments.json` file
pub const MARKET_CONTRACT_KEY: &str = "market_contract";

/// The Core class hash key in the `deployments.json` file
pub const CORE_CLASS_HASH_KEY: &str = "core_class_hash";

/// The market class hash key in the `deployments.json` file
pub const MARKET_CLASS_HASH_KEY: &str = "market_class_hash";
