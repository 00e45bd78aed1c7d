//! # CodePulse Shared
//!
//! Wire types shared by the API server and its clients.

pub mod dto;
pub mod patch;
pub mod response;

pub use patch::{PatchDocument, PatchError, PatchOperation};
pub use response::{ErrorResponse, MessageResponse};
