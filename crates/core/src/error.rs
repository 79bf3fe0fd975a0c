//! Domain errors, independent of storage and transport.

use crate::types::DbId;

/// The API crate maps each variant onto an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced post, comment or user does not exist.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input, rejected before the store is touched.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The caller already likes this post or comment.
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        assert_eq!(CoreError::not_found("Post", 12).to_string(), "Post 12 does not exist");
    }
}
