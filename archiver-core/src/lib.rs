//! Use cases of the GitLab archiver.
//!
//! This crate contains no I/O. Everything that talks to GitLab or to a
//! secret store goes through the traits in [`gateways`].

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use archiver_entities::{
        access_level::*, email::*, member::*, project::*, repo::*, token::*,
    };
}
