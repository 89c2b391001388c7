//! The network operations the deployment pipeline is built from, and their
//! implementation over a Starknet JSON-RPC node

use std::sync::Arc;

use rand::{thread_rng, RngCore};
use starknet::{
    accounts::{Account, ConnectedAccount, ExecutionEncoding, SingleOwnerAccount},
    contract::ContractFactory,
    core::{
        types::{
            BlockId, BlockTag, Call, DeclareTransactionResult, ExecutionResult, Felt,
            FunctionCall, InvokeTransactionResult, StarknetError,
        },
        utils::get_selector_from_name,
    },
    providers::{jsonrpc::HttpTransport, JsonRpcClient, Provider, ProviderError},
    signers::{LocalWallet, SigningKey},
};
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

use crate::{
    artifacts::ContractArtifact,
    config::NetworkConfig,
    constants::{CONFIRMATION_POLL_INTERVAL, CONFIRMATION_TIMEOUT},
    errors::ScriptError,
    types::DeployedContract,
};

/// The account type the scripts send transactions from
pub type ScriptAccount = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

/// The network operations used by the deployment pipeline.
///
/// Every call is awaited to completion before the next one is issued.
#[allow(async_fn_in_trait)]
pub trait DeploymentBackend {
    /// Declares the artifact's class if it isn't declared yet, then deploys
    /// an instance of it with the given constructor calldata
    async fn declare_and_deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_calldata: Vec<Felt>,
    ) -> Result<DeployedContract, ScriptError>;

    /// The class hash of the contract deployed at `address`
    async fn class_hash_at(&self, address: Felt) -> Result<Felt, ScriptError>;

    /// The current nonce of the sending account
    async fn nonce(&self) -> Result<Felt, ScriptError>;

    /// Sends a v3 invoke transaction with an explicit nonce, returning its hash
    async fn invoke(
        &self,
        contract_address: Felt,
        entry_point: &str,
        calldata: Vec<Felt>,
        nonce: Felt,
    ) -> Result<Felt, ScriptError>;

    /// Blocks until the transaction is accepted. A reverted transaction is an error.
    async fn wait_for_confirmation(&self, transaction_hash: Felt) -> Result<(), ScriptError>;

    /// Calls a view entry point
    async fn call(
        &self,
        contract_address: Felt,
        entry_point: &str,
        calldata: Vec<Felt>,
    ) -> Result<Vec<Felt>, ScriptError>;
}

/// Connects a single-owner account to the node at `config.rpc_url`
pub async fn setup_account(config: &NetworkConfig) -> Result<ScriptAccount, ScriptError> {
    let provider = JsonRpcClient::new(HttpTransport::new(config.rpc_url.clone()));

    let chain_id = provider
        .chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let signer = LocalWallet::from(SigningKey::from_secret_scalar(config.private_key));

    Ok(SingleOwnerAccount::new(
        provider,
        signer,
        config.account_address,
        chain_id,
        ExecutionEncoding::New,
    ))
}

/// A random salt, kept below 2^248 so it is always a valid felt
pub fn random_salt() -> Felt {
    let mut bytes = [0_u8; 32];
    thread_rng().fill_bytes(&mut bytes[1..]);
    Felt::from_bytes_be(&bytes)
}

/// Builds the call to `entry_point` on the contract at `contract_address`
pub fn build_call(
    contract_address: Felt,
    entry_point: &str,
    calldata: Vec<Felt>,
) -> Result<Call, ScriptError> {
    let selector = get_selector_from_name(entry_point)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    Ok(Call {
        to: contract_address,
        selector,
        calldata,
    })
}

/// [`DeploymentBackend`] over a Starknet JSON-RPC node
pub struct StarknetBackend {
    account: ScriptAccount,
    /// Deployment salt; a fresh random salt is drawn per deployment if unset
    salt: Option<Felt>,
}

impl StarknetBackend {
    pub fn new(account: ScriptAccount, salt: Option<Felt>) -> Self {
        Self { account, salt }
    }

    pub fn account(&self) -> &ScriptAccount {
        &self.account
    }

    async fn is_declared(&self, class_hash: Felt) -> Result<bool, ScriptError> {
        match self
            .account
            .provider()
            .get_class(BlockId::Tag(BlockTag::Latest), class_hash)
            .await
        {
            Ok(_) => Ok(true),
            Err(ProviderError::StarknetError(StarknetError::ClassHashNotFound)) => Ok(false),
            Err(e) => Err(ScriptError::ContractDeclaration(e.to_string())),
        }
    }

    /// Declares the artifact's class unless it is already on chain, returning
    /// the class hash and the declaration transaction hash, if one was sent
    async fn get_or_declare(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<(Felt, Option<Felt>), ScriptError> {
        let flattened_class = artifact
            .sierra_class()?
            .flatten()
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", artifact.name, e)))?;
        let class_hash = flattened_class.class_hash();

        if self.is_declared(class_hash).await? {
            debug!(
                "{} class {:#064x} already declared, skipping declaration",
                artifact.name, class_hash
            );
            return Ok((class_hash, None));
        }

        let casm_class_hash = artifact
            .casm_class()?
            .class_hash()
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", artifact.name, e)))?;

        debug!("Declaring {} contract...", artifact.name);
        let result = self
            .account
            .declare_v3(Arc::new(flattened_class), casm_class_hash)
            .send()
            .await
            .map_err(|e| ScriptError::ContractDeclaration(format!("{}: {}", artifact.name, e)))?;
        trace!("Declaration result: {:?}", result);

        let DeclareTransactionResult {
            transaction_hash,
            class_hash,
        } = result;
        self.wait_for_confirmation(transaction_hash).await?;

        Ok((class_hash, Some(transaction_hash)))
    }
}

impl DeploymentBackend for StarknetBackend {
    async fn declare_and_deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_calldata: Vec<Felt>,
    ) -> Result<DeployedContract, ScriptError> {
        let (class_hash, declare_tx_hash) = self.get_or_declare(artifact).await?;

        debug!("Deploying {} contract...", artifact.name);
        let contract_factory = ContractFactory::new(class_hash, &self.account);
        let deployment = contract_factory.deploy_v3(
            constructor_calldata,
            self.salt.unwrap_or_else(random_salt),
            false, /* unique */
        );
        let address = deployment.deployed_address();

        let deploy_result = deployment
            .send()
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{}: {}", artifact.name, e)))?;
        trace!("Deploy result: {:?}", deploy_result);

        let InvokeTransactionResult { transaction_hash } = deploy_result;
        self.wait_for_confirmation(transaction_hash).await?;

        Ok(DeployedContract {
            class_hash,
            address,
            declare_tx_hash,
            deploy_tx_hash: transaction_hash,
        })
    }

    async fn class_hash_at(&self, address: Felt) -> Result<Felt, ScriptError> {
        self.account
            .provider()
            .get_class_hash_at(BlockId::Tag(BlockTag::Latest), address)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn nonce(&self) -> Result<Felt, ScriptError> {
        self.account
            .get_nonce()
            .await
            .map_err(|e| ScriptError::NonceFetching(e.to_string()))
    }

    async fn invoke(
        &self,
        contract_address: Felt,
        entry_point: &str,
        calldata: Vec<Felt>,
        nonce: Felt,
    ) -> Result<Felt, ScriptError> {
        let call = build_call(contract_address, entry_point, calldata)?;

        debug!("Invoking {} on contract...", entry_point);
        let result = self
            .account
            .execute_v3(vec![call])
            .nonce(nonce)
            .send()
            .await
            .map_err(|e| ScriptError::ContractInteraction(format!("{entry_point}: {e}")))?;
        trace!("Invoke result: {:?}", result);

        Ok(result.transaction_hash)
    }

    async fn wait_for_confirmation(&self, transaction_hash: Felt) -> Result<(), ScriptError> {
        let start = Instant::now();
        loop {
            match self
                .account
                .provider()
                .get_transaction_receipt(transaction_hash)
                .await
            {
                Ok(receipt) => {
                    return match receipt.receipt.execution_result() {
                        ExecutionResult::Succeeded => Ok(()),
                        ExecutionResult::Reverted { reason } => {
                            Err(ScriptError::TransactionConfirmation(format!(
                                "transaction {transaction_hash:#064x} reverted: {reason}"
                            )))
                        }
                    }
                }
                Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {
                    trace!("Transaction {:#064x} not yet received", transaction_hash);
                }
                Err(e) => return Err(ScriptError::TransactionConfirmation(e.to_string())),
            }

            if start.elapsed() >= CONFIRMATION_TIMEOUT {
                return Err(ScriptError::TransactionConfirmation(format!(
                    "transaction {transaction_hash:#064x} not accepted after {}s",
                    CONFIRMATION_TIMEOUT.as_secs()
                )));
            }
            sleep(CONFIRMATION_POLL_INTERVAL).await;
        }
    }

    async fn call(
        &self,
        contract_address: Felt,
        entry_point: &str,
        calldata: Vec<Felt>,
    ) -> Result<Vec<Felt>, ScriptError> {
        debug!("Calling {} on contract...", entry_point);
        self.account
            .provider()
            .call(
                FunctionCall {
                    contract_address,
                    entry_point_selector: get_selector_from_name(entry_point)
                        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?,
                    calldata,
                },
                BlockId::Tag(BlockTag::Latest),
            )
            .await
            .map_err(|e| ScriptError::ContractInteraction(format!("{entry_point}: {e}")))
    }
}
