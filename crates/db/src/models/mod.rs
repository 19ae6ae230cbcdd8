//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the JSON wire shape
//! - `Deserialize` DTOs for create and update requests

pub mod forum;
pub mod post;
pub mod status;
pub mod thread;
pub mod user;
pub mod vote;
