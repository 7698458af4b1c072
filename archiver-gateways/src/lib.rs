//! Infrastructure adapters implementing the gateway traits of `archiver-core`.

pub mod env;
pub mod gitlab;
pub mod ssm;
