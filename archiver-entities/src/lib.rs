#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # archiver-entities
//!
//! Domain entities of the GitLab archiver.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod access_level;
pub mod email;
pub mod member;
pub mod project;
pub mod repo;
pub mod token;
