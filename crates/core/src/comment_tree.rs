//! Threaded comment tree reconstruction.
//!
//! Comments are stored flat with an optional `parent_id`. The post detail
//! view needs them nested, so [`build_comment_tree`] turns the flat listing
//! for one post into a forest of [`CommentNode`]s.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// One comment as fetched from storage, before nesting.
#[derive(Debug, Clone)]
pub struct FlatComment {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    /// Author display name.
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// A comment with its replies, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CommentNode {
    pub id: DbId,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    fn from_flat(flat: FlatComment, children: Vec<CommentNode>) -> Self {
        Self {
            id: flat.id,
            author: flat.author,
            content: flat.content,
            created_at: flat.created_at,
            children,
        }
    }
}

/// Build the reply forest for one post.
///
/// The input must already be in display order (created_at ascending); roots
/// and every child list keep that order. The builder never sorts.
///
/// The input is expected to contain every referenced parent. A comment whose
/// parent is missing from the input is placed at root level. If an id
/// appears more than once, only the first occurrence is kept.
///
/// Nesting is materialised bottom-up with an explicit stack, so arbitrarily
/// deep reply chains are built without recursion.
pub fn build_comment_tree(comments: Vec<FlatComment>) -> Vec<CommentNode> {
    let count = comments.len();

    // Pass 1: id -> position.
    let mut index: HashMap<DbId, usize> = HashMap::with_capacity(count);
    for (pos, comment) in comments.iter().enumerate() {
        index.entry(comment.id).or_insert(pos);
    }

    // Pass 2: attach each comment to its parent's child list or to the roots.
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut roots: Vec<usize> = Vec::new();
    for (pos, comment) in comments.iter().enumerate() {
        if index.get(&comment.id) != Some(&pos) {
            continue;
        }
        match comment.parent_id.and_then(|parent| index.get(&parent)) {
            Some(&parent_pos) => children[parent_pos].push(pos),
            None => roots.push(pos),
        }
    }

    // Post-order assembly: a node is built once all of its children are.
    let mut pending: Vec<Option<FlatComment>> = comments.into_iter().map(Some).collect();
    let mut built: Vec<Option<CommentNode>> = (0..count).map(|_| None).collect();
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&pos| (pos, false)).collect();

    while let Some((pos, expanded)) = stack.pop() {
        if expanded {
            let kids = std::mem::take(&mut children[pos])
                .into_iter()
                .filter_map(|child| built[child].take())
                .collect();
            if let Some(flat) = pending[pos].take() {
                built[pos] = Some(CommentNode::from_flat(flat, kids));
            }
        } else {
            stack.push((pos, true));
            stack.extend(children[pos].iter().rev().map(|&child| (child, false)));
        }
    }

    roots
        .into_iter()
        .filter_map(|pos| built[pos].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn flat(id: DbId, parent_id: Option<DbId>) -> FlatComment {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        FlatComment {
            id,
            parent_id,
            author: format!("user{id}"),
            content: format!("comment {id}"),
            created_at: base + Duration::minutes(id),
        }
    }

    fn ids(nodes: &[CommentNode]) -> Vec<DbId> {
        nodes.iter().map(|n| n.id).collect()
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build_comment_tree(Vec::new()).is_empty());
    }

    #[test]
    fn builds_nested_replies() {
        let forest = build_comment_tree(vec![
            flat(1, None),
            flat(2, Some(1)),
            flat(3, Some(1)),
            flat(4, Some(2)),
        ]);

        assert_eq!(ids(&forest), vec![1]);
        let root = &forest[0];
        assert_eq!(ids(&root.children), vec![2, 3]);
        assert_eq!(ids(&root.children[0].children), vec![4]);
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn preserves_input_order_of_roots_and_children() {
        let forest = build_comment_tree(vec![
            flat(5, None),
            flat(2, None),
            flat(9, Some(5)),
            flat(7, Some(5)),
            flat(8, Some(5)),
        ]);

        assert_eq!(ids(&forest), vec![5, 2]);
        assert_eq!(ids(&forest[0].children), vec![9, 7, 8]);
    }

    #[test]
    fn reply_listed_before_parent_is_still_nested() {
        let forest = build_comment_tree(vec![flat(2, Some(1)), flat(1, None)]);

        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(ids(&forest[0].children), vec![2]);
    }

    #[test]
    fn comment_with_missing_parent_lands_at_root() {
        let forest = build_comment_tree(vec![flat(1, None), flat(3, Some(99))]);
        assert_eq!(ids(&forest), vec![1, 3]);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let mut dup = flat(1, None);
        dup.content = "duplicate".into();
        let forest = build_comment_tree(vec![flat(1, None), dup]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].content, "comment 1");
    }

    #[test]
    fn node_keeps_its_own_fields() {
        let forest = build_comment_tree(vec![flat(1, None)]);
        let node = &forest[0];
        assert_eq!(node.author, "user1");
        assert_eq!(node.content, "comment 1");
        assert_eq!(
            node.created_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 1, 0).unwrap()
        );
    }

    #[test]
    fn deep_chain_has_no_depth_limit() {
        let depth = 1_000;
        let comments: Vec<FlatComment> = (1..=depth)
            .map(|id| flat(id, if id == 1 { None } else { Some(id - 1) }))
            .collect();

        let forest = build_comment_tree(comments);
        assert_eq!(forest.len(), 1);

        let mut node = &forest[0];
        let mut seen = 1;
        while let Some(child) = node.children.first() {
            assert_eq!(child.id, node.id + 1);
            node = child;
            seen += 1;
        }
        assert_eq!(seen, depth);
    }

    #[test]
    fn serializes_children_recursively() {
        let forest = build_comment_tree(vec![flat(1, None), flat(2, Some(1))]);
        let json = serde_json::to_value(&forest).unwrap();

        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["author"], "user1");
        assert_eq!(json[0]["children"][0]["id"], 2);
        assert_eq!(json[0]["children"][0]["children"], serde_json::json!([]));
    }
}
