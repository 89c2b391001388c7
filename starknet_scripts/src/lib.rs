//! Scripts for deploying the conode protocol's Core & market contracts to a
//! Starknet node, and for registering markets in the Core contract.

pub mod artifacts;
pub mod backend;
pub mod calldata;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod orchestrator;
pub mod types;
pub mod utils;
