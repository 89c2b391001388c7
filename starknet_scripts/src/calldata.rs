//! Calldata serialization and Cairo string packing

use itertools::Itertools;
use starknet::core::{
    types::Felt,
    utils::{cairo_short_string_to_felt, parse_cairo_short_string},
};

use crate::{constants::SHORT_STRING_MAX_LEN, errors::ScriptError};

/// A type that can be flattened into the felts a contract entry point expects
pub trait CalldataSerializable {
    /// Serializes `self` into calldata, in the field order of the Cairo type
    fn to_calldata(&self) -> Vec<Felt>;
}

impl CalldataSerializable for Felt {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![*self]
    }
}

impl CalldataSerializable for u64 {
    fn to_calldata(&self) -> Vec<Felt> {
        vec![Felt::from(*self)]
    }
}

fn check_packable(s: &str) -> Result<(), ScriptError> {
    if !s.is_ascii() {
        return Err(ScriptError::CalldataConstruction(format!(
            "cannot pack non-ASCII string {s:?}"
        )));
    }
    // Leading NUL bytes vanish when the felt is unpacked
    if s.contains('\0') {
        return Err(ScriptError::CalldataConstruction(format!(
            "cannot pack string containing NUL {s:?}"
        )));
    }
    Ok(())
}

/// Packs a string of at most 31 ASCII characters into a single felt
pub fn encode_short_string(s: &str) -> Result<Felt, ScriptError> {
    check_packable(s)?;
    cairo_short_string_to_felt(s).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Splits an ASCII string into successive 31-character chunks, packing each
/// chunk as a short string
pub fn encode_long_string(s: &str) -> Result<Vec<Felt>, ScriptError> {
    check_packable(s)?;
    s.as_bytes()
        .chunks(SHORT_STRING_MAX_LEN)
        .map(|chunk| {
            // ASCII was checked above, so every chunk is valid UTF-8
            let chunk = std::str::from_utf8(chunk)
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
            encode_short_string(chunk)
        })
        .collect()
}

/// Unpacks a short string felt
pub fn decode_short_string(felt: Felt) -> Result<String, ScriptError> {
    parse_cairo_short_string(&felt).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Unpacks and concatenates the chunks produced by [`encode_long_string`]
pub fn decode_long_string(chunks: &[Felt]) -> Result<String, ScriptError> {
    chunks.iter().map(|chunk| decode_short_string(*chunk)).collect()
}

/// Renders felts as a bracketed list of hex strings, for logging
pub fn format_felts(felts: &[Felt]) -> String {
    format!("[{}]", felts.iter().map(|f| format!("{f:#x}")).join(", "))
}
