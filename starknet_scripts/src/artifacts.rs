//! Loading of compiled contract artifacts

use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use serde_json::Value;
use starknet::core::types::contract::{CompiledClass, SierraClass};

use crate::{
    constants::{CASM_FILE_EXTENSION, SIERRA_FILE_EXTENSION},
    errors::ScriptError,
};

/// The Sierra & CASM documents Scarb produces for one contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// The contract's name, without the package prefix
    pub name: String,
    /// The Sierra contract class
    pub sierra: Value,
    /// The CASM compiled contract class
    pub casm: Value,
}

impl ContractArtifact {
    pub fn new(name: impl Into<String>, sierra: Value, casm: Value) -> Self {
        Self {
            name: name.into(),
            sierra,
            casm,
        }
    }

    /// Reads the artifacts of `contract` from `artifacts_dir`.
    ///
    /// The files are expected to be named
    /// `{package}_{contract}.{contract_class, compiled_contract_class}.json`.
    pub fn load(artifacts_dir: &Path, package: &str, contract: &str) -> Result<Self, ScriptError> {
        let (sierra_path, casm_path) = artifact_paths(artifacts_dir, package, contract);
        Ok(Self::new(
            contract,
            get_json_from_file(&sierra_path)?,
            get_json_from_file(&casm_path)?,
        ))
    }

    /// Parses the Sierra document into a contract class
    pub fn sierra_class(&self) -> Result<SierraClass, ScriptError> {
        serde_json::from_value(self.sierra.clone()).map_err(|e| {
            ScriptError::ArtifactParsing(format!("{} Sierra class: {}", self.name, e))
        })
    }

    /// Parses the CASM document into a compiled class
    pub fn casm_class(&self) -> Result<CompiledClass, ScriptError> {
        serde_json::from_value(self.casm.clone())
            .map_err(|e| ScriptError::ArtifactParsing(format!("{} CASM class: {}", self.name, e)))
    }
}

/// The paths of the Sierra & CASM artifacts of `contract`
pub fn artifact_paths(artifacts_dir: &Path, package: &str, contract: &str) -> (PathBuf, PathBuf) {
    (
        artifacts_dir.join(format!("{package}_{contract}.{SIERRA_FILE_EXTENSION}")),
        artifacts_dir.join(format!("{package}_{contract}.{CASM_FILE_EXTENSION}")),
    )
}

/// Reads and parses a JSON document
pub fn get_json_from_file(file_path: &Path) -> Result<Value, ScriptError> {
    let file = File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScriptError::ArtifactNotFound(file_path.display().to_string()),
        _ => ScriptError::ArtifactParsing(format!("{}: {}", file_path.display(), e)),
    })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", file_path.display(), e)))
}
