use std::fs;

use conode_scripts::{
    artifacts::{artifact_paths, get_json_from_file, ContractArtifact},
    constants::{CORE_CONTRACT_NAME, PACKAGE_NAME},
    errors::ScriptError,
};
use eyre::Result;
use tempfile::tempdir;
use tests::utils::{dummy_artifact, write_dummy_artifacts};

#[test]
fn test_artifact_paths() {
    let (sierra, casm) = artifact_paths("target/dev".as_ref(), PACKAGE_NAME, CORE_CONTRACT_NAME);

    assert!(sierra.ends_with("conode_protocol_Core.contract_class.json"));
    assert!(casm.ends_with("conode_protocol_Core.compiled_contract_class.json"));
}

#[test]
fn test_load_artifact() -> Result<()> {
    let dir = tempdir()?;
    write_dummy_artifacts(dir.path())?;

    let artifact = ContractArtifact::load(dir.path(), PACKAGE_NAME, CORE_CONTRACT_NAME)?;
    let expected = dummy_artifact(CORE_CONTRACT_NAME);

    assert_eq!(artifact.name, CORE_CONTRACT_NAME);
    assert_eq!(artifact.sierra, expected.sierra);
    assert_eq!(artifact.casm, expected.casm);
    Ok(())
}

#[test]
fn test_missing_artifact() -> Result<()> {
    let dir = tempdir()?;

    let err = ContractArtifact::load(dir.path(), PACKAGE_NAME, CORE_CONTRACT_NAME).unwrap_err();

    let (sierra_path, _) = artifact_paths(dir.path(), PACKAGE_NAME, CORE_CONTRACT_NAME);
    assert_eq!(
        err,
        ScriptError::ArtifactNotFound(sierra_path.display().to_string())
    );
    Ok(())
}

#[test]
fn test_missing_casm_artifact() -> Result<()> {
    let dir = tempdir()?;
    let (sierra_path, casm_path) = artifact_paths(dir.path(), PACKAGE_NAME, CORE_CONTRACT_NAME);
    fs::write(sierra_path, "{}")?;

    let err = ContractArtifact::load(dir.path(), PACKAGE_NAME, CORE_CONTRACT_NAME).unwrap_err();

    assert_eq!(
        err,
        ScriptError::ArtifactNotFound(casm_path.display().to_string())
    );
    Ok(())
}

#[test]
fn test_malformed_artifact() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"sierra_program\": [")?;

    // The same input fails the same way every time
    for _ in 0..3 {
        match get_json_from_file(&path) {
            Err(ScriptError::ArtifactParsing(msg)) => {
                assert!(msg.contains("broken.json"), "unexpected message: {msg}")
            }
            other => panic!("expected a parsing error, got {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn test_wrong_shape_artifact() {
    let artifact = dummy_artifact(CORE_CONTRACT_NAME);

    assert!(matches!(
        artifact.sierra_class(),
        Err(ScriptError::ArtifactParsing(_))
    ));
    assert!(matches!(
        artifact.casm_class(),
        Err(ScriptError::ArtifactParsing(_))
    ));
}
