//! Domain types and pure logic for the karma feed.
//!
//! Nothing in this crate performs I/O. The database crate and the HTTP layer
//! both depend on it for shared ids, the error taxonomy, the like target
//! model, the comment tree builder, and leaderboard window rules.

pub mod comment_tree;
pub mod error;
pub mod leaderboard;
pub mod like;
pub mod types;
