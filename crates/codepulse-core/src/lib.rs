//! # CodePulse Core
//!
//! The domain layer of the CodePulse API.
//! This crate holds the `Category` entity and the repository ports, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
