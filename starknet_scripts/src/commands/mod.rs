pub mod deploy;
pub mod market;
