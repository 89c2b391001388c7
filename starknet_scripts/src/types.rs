//! Type definitions used throughout the scripts

use std::iter;

use starknet::core::types::Felt;

use crate::{
    calldata::{
        decode_long_string, decode_short_string, encode_long_string, encode_short_string,
        CalldataSerializable,
    },
    constants::SHORT_STRING_MAX_LEN,
    errors::ScriptError,
};

// ---------------
// | CAIRO ENUMS |
// ---------------

// Variant indices follow the declaration order of the corresponding Cairo enums.
// A Cairo enum is serialized as its variant index followed by the variant's payload.

/// A string stored in a market, either packed inline or chunked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketString {
    /// A short string (at most 31 characters) packed into a single felt
    DString(Felt),
    /// A long string, split into packed 31-character chunks
    LString(Vec<Felt>),
}

impl MarketString {
    /// Packs `s` inline when it fits in a short string, chunking it otherwise
    pub fn new(s: &str) -> Result<Self, ScriptError> {
        if s.len() <= SHORT_STRING_MAX_LEN {
            encode_short_string(s).map(MarketString::DString)
        } else {
            encode_long_string(s).map(MarketString::LString)
        }
    }

    /// Recovers the original string
    pub fn decode(&self) -> Result<String, ScriptError> {
        match self {
            MarketString::DString(felt) => decode_short_string(*felt),
            MarketString::LString(chunks) => decode_long_string(chunks),
        }
    }
}

impl CalldataSerializable for MarketString {
    fn to_calldata(&self) -> Vec<Felt> {
        match self {
            MarketString::DString(felt) => vec![Felt::ZERO, *felt],
            MarketString::LString(chunks) => iter::once(Felt::ONE)
                .chain(iter::once(Felt::from(chunks.len())))
                .chain(chunks.iter().copied())
                .collect(),
        }
    }
}

/// How a market's metadata reference should be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataType {
    /// The metadata is served over HTTP(S)
    Http,
}

impl MetadataType {
    /// The Cairo variant index
    pub const fn variant_index(self) -> u64 {
        match self {
            MetadataType::Http => 0,
        }
    }
}

impl CalldataSerializable for MetadataType {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![Felt::from(self.variant_index())]
    }
}

/// Lifecycle state of a market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketState {
    /// The market accepts tasks
    Active,
}

impl MarketState {
    /// The Cairo variant index
    pub const fn variant_index(self) -> u64 {
        match self {
            MarketState::Active => 0,
        }
    }
}

impl CalldataSerializable for MarketState {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![Felt::from(self.variant_index())]
    }
}

/// The kind of a market contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketType {
    /// The default market
    Basic,
    /// A real-time market
    RealTime,
}

impl MarketType {
    /// The Cairo variant index
    pub const fn variant_index(self) -> u64 {
        match self {
            MarketType::Basic => 0,
            MarketType::RealTime => 1,
        }
    }
}

impl CalldataSerializable for MarketType {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![Felt::from(self.variant_index())]
    }
}

// ------------------
// | CALL ARGUMENTS |
// ------------------

/// Arguments to the Core contract's constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConstructorArgs {
    /// The token tasks are paid out in
    pub payout_token: Felt,
    /// The fee taken from each task, in percent
    pub task_fee_percentage: u64,
    /// The share of a task paid as reward, in percent
    pub reward_percentage: u64,
}

impl CalldataSerializable for CoreConstructorArgs {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![
            self.payout_token,
            Felt::from(self.task_fee_percentage),
            Felt::from(self.reward_percentage),
        ]
    }
}

/// Arguments to the DefaultMarket contract's constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConstructorArgs {
    /// Address of the Core contract owning the market
    pub core_address: Felt,
    /// The kind of market. Serialized as the bare variant index.
    pub market_type: MarketType,
}

impl CalldataSerializable for MarketConstructorArgs {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![self.core_address, Felt::from(self.market_type.variant_index())]
    }
}

/// A market entry, as passed to `register_market`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRecord {
    pub id: u64,
    pub title: MarketString,
    pub metadata: MarketString,
    pub metadata_type: MetadataType,
    pub state: MarketState,
    pub m_type: MarketType,
    /// Address of the market contract
    pub addr: Felt,
}

impl CalldataSerializable for MarketRecord {
    fn to_calldata(&self) -> Vec<Felt> {
        self.id
            .to_calldata()
            .into_iter()
            .chain(self.title.to_calldata())
            .chain(self.metadata.to_calldata())
            .chain(self.metadata_type.to_calldata())
            .chain(self.state.to_calldata())
            .chain(self.m_type.to_calldata())
            .chain(self.addr.to_calldata())
            .collect()
    }
}

// ----------------
// | STEP RESULTS |
// ----------------

/// A contract instance created by a declare+deploy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    pub class_hash: Felt,
    pub address: Felt,
    /// `None` if the class had already been declared
    pub declare_tx_hash: Option<Felt>,
    pub deploy_tx_hash: Felt,
}

/// The outcome of registering a market in the Core contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The registration transaction was accepted
    Confirmed {
        transaction_hash: Felt,
    },
    /// The registration failed. The transaction hash is present if the
    /// invocation was submitted but never confirmed.
    Failed {
        transaction_hash: Option<Felt>,
        reason: String,
    },
}

impl RegistrationOutcome {
    /// Whether the registration was confirmed
    pub fn is_confirmed(&self) -> bool {
        matches!(self, RegistrationOutcome::Confirmed { .. })
    }
}

/// Everything a full deployment run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReport {
    pub core: DeployedContract,
    /// The class hash the node reports at the Core address
    pub core_deployed_class_hash: Felt,
    pub market: DeployedContract,
    /// The `register_market` calldata
    pub registration_calldata: Vec<Felt>,
    pub registration: RegistrationOutcome,
    /// Raw result of `get_all_markets`
    pub markets: Vec<Felt>,
}
