//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Read-model structs for joined or aggregated queries where needed
//! - A `Deserialize` create DTO for inserts

pub mod comment;
pub mod karma;
pub mod like;
pub mod post;
pub mod user;
