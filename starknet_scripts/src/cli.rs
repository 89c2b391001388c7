//! Command line interface for the deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_MARKET_ID, DEFAULT_MARKET_METADATA, DEFAULT_MARKET_TITLE,
    DEFAULT_REWARD_PERCENTAGE, DEFAULT_TASK_FEE_PERCENTAGE, DEVNET_HOST, DEVNET_PORT,
    ETH_ADDRESS, PACKAGE_NAME, PREDEPLOYED_ACCOUNT, PREDEPLOYED_PRIVATE_KEY,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Declares & deploys the Core and DefaultMarket contracts,
    /// registers the market in Core, and lists the registered markets.
    Deploy(DeployArgs),

    /// Registers an already-deployed market in an already-deployed Core contract.
    RegisterMarket(RegisterMarketArgs),

    /// Lists the markets registered in a Core contract.
    ListMarkets(ListMarketsArgs),
}

fn default_rpc_url() -> String {
    format!("http://{DEVNET_HOST}:{DEVNET_PORT}")
}

#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    #[arg(long, env = "STARKNET_RPC_URL", default_value_t = default_rpc_url())]
    /// The JSON-RPC endpoint of the node.
    pub rpc_url: String,

    #[arg(short, long, env = "ACCOUNT_ADDRESS", default_value = PREDEPLOYED_ACCOUNT)]
    /// The address of the account sending the transactions, in hex form.
    /// Defaults to the first predeployed devnet account.
    pub address: String,

    #[arg(short, long, env = "PRIVATE_KEY", default_value = PREDEPLOYED_PRIVATE_KEY)]
    /// The private key of the account, in hex form.
    pub private_key: String,
}

#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    #[arg(long, default_value_t = DEFAULT_MARKET_ID)]
    /// The identifier of the registered market.
    pub market_id: u64,

    #[arg(long, default_value = DEFAULT_MARKET_TITLE)]
    /// The title of the registered market.
    pub market_title: String,

    #[arg(long, default_value = DEFAULT_MARKET_METADATA)]
    /// The HTTP metadata reference of the registered market.
    pub market_metadata: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    #[command(flatten)]
    pub market: MarketArgs,

    #[arg(long, env = "ARTIFACTS_PATH", default_value = DEFAULT_ARTIFACTS_DIR, long_help)]
    /// The path to a folder containing the Sierra & CASM artifacts of the
    /// Core & DefaultMarket contracts.
    /// The files in this folder should be named:
    /// {package}_{Core, DefaultMarket}.{contract_class, compiled_contract_class}.json
    pub artifacts_path: String,

    #[arg(long, default_value = PACKAGE_NAME)]
    /// The Scarb package name prefixing the artifact files.
    pub package: String,

    #[arg(long, default_value = ETH_ADDRESS)]
    /// The payout token passed to the Core constructor, in hex form.
    pub payout_token: String,

    #[arg(long, default_value_t = DEFAULT_TASK_FEE_PERCENTAGE)]
    /// The task fee percentage passed to the Core constructor.
    pub task_fee_percentage: u64,

    #[arg(long, default_value_t = DEFAULT_REWARD_PERCENTAGE)]
    /// The reward percentage passed to the Core constructor.
    pub reward_percentage: u64,

    #[arg(long)]
    /// The salt used for both deployments, in hex form. Random if omitted.
    pub salt: Option<String>,

    #[arg(short, long)]
    /// A JSON file to record the deployed addresses & class hashes in.
    pub deployments_path: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RegisterMarketArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    #[command(flatten)]
    pub market: MarketArgs,

    #[arg(long)]
    /// The address of the Core contract. Read from the deployments file if omitted.
    pub core_address: Option<String>,

    #[arg(long)]
    /// The address of the market contract. Read from the deployments file if omitted.
    pub market_address: Option<String>,

    #[arg(short, long)]
    /// The JSON file written by `deploy`.
    pub deployments_path: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListMarketsArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    #[arg(long)]
    /// The address of the Core contract. Read from the deployments file if omitted.
    pub core_address: Option<String>,

    #[arg(short, long)]
    /// The JSON file written by `deploy`.
    pub deployments_path: Option<String>,
}
