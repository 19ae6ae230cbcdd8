//! Materialized-path codec for reply trees.
//!
//! A path is [`MAX_TREE_LEVEL`] segments of [`MAX_ID_LENGTH`] zero-padded
//! digits joined by [`PATH_DELIMITER`]. Segment `n` holds the id of the
//! post's ancestor at depth `n` (the post itself at its own depth); deeper
//! levels hold the all-zero stub. Every segment has the same width, so plain
//! byte comparison of two paths in one thread orders them exactly like a
//! pre-order walk of the reply tree, with siblings in id order.
//!
//! ```
//! use forum_core::post_path::{derive_path, root_ancestor_key, root_path};
//!
//! let root = root_path(42).unwrap();
//! assert_eq!(root, "0000042.0000000.0000000.0000000.0000000");
//!
//! let reply = derive_path(&root, 57).unwrap();
//! assert_eq!(reply, "0000042.0000057.0000000.0000000.0000000");
//! assert_eq!(root_ancestor_key(&reply), root);
//! ```

use crate::error::CoreError;
use crate::types::PostId;

/// Separator between depth segments.
pub const PATH_DELIMITER: &str = ".";

/// Digits per depth segment.
pub const MAX_ID_LENGTH: usize = 7;

/// Number of depth segments, i.e. the deepest a reply chain may go.
pub const MAX_TREE_LEVEL: usize = 5;

/// Byte length shared by every path.
pub const PATH_LENGTH: usize = MAX_TREE_LEVEL * MAX_ID_LENGTH + (MAX_TREE_LEVEL - 1);

/// Largest id that still fits in one segment.
pub const MAX_PATH_ID: PostId = 9_999_999;

/// Placeholder segment for a depth level not yet occupied.
const ZERO_STUB: &str = "0000000";

const _: () = assert!(ZERO_STUB.len() == MAX_ID_LENGTH);

/// The byte right after [`PATH_DELIMITER`].
const SUBTREE_TERMINATOR: char = '/';

const _: () = assert!(SUBTREE_TERMINATOR as u8 == b'.' + 1);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The parent already sits at the deepest level; no stub is left to fill.
    #[error("Reply depth exceeds the maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    /// The id is `0`, negative, or wider than one segment.
    #[error("Post id {id} cannot be encoded in a {width}-digit path segment")]
    IdOutOfRange { id: PostId, width: usize },
}

impl From<PathError> for CoreError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::DepthExceeded { .. } => CoreError::Validation(err.to_string()),
            PathError::IdOutOfRange { .. } => CoreError::Internal(err.to_string()),
        }
    }
}

/// The root template: a zero stub for every level.
pub fn zero_path() -> String {
    vec![ZERO_STUB; MAX_TREE_LEVEL].join(PATH_DELIMITER)
}

/// Zero-pad `id` to [`MAX_ID_LENGTH`] digits.
pub fn pad(id: PostId) -> Result<String, PathError> {
    if !(1..=MAX_PATH_ID).contains(&id) {
        return Err(PathError::IdOutOfRange {
            id,
            width: MAX_ID_LENGTH,
        });
    }
    Ok(format!("{id:0width$}", width = MAX_ID_LENGTH))
}

/// Path of a new post replying to the post stored at `parent_path`.
///
/// Fills the first free (stub) level of the parent's path with the new id.
/// Fails when the parent is already at [`MAX_TREE_LEVEL`].
pub fn derive_path(parent_path: &str, id: PostId) -> Result<String, PathError> {
    let padded = pad(id)?;
    let mut segments: Vec<&str> = parent_path.split(PATH_DELIMITER).collect();
    let slot = segments
        .iter()
        .position(|segment| *segment == ZERO_STUB)
        .ok_or(PathError::DepthExceeded {
            max_depth: MAX_TREE_LEVEL,
        })?;
    segments[slot] = &padded;
    Ok(segments.join(PATH_DELIMITER))
}

/// Path of a new root post (`parent = 0`).
pub fn root_path(id: PostId) -> Result<String, PathError> {
    derive_path(&zero_path(), id)
}

/// The first segment: the padded id of the root post the path descends from.
pub fn root_segment(path: &str) -> &str {
    match path.split_once(PATH_DELIMITER) {
        Some((first, _)) => first,
        None => path,
    }
}

/// Key covering the whole subtree of the path's root post.
///
/// Equal to the root post's own path, so range bounds against it include or
/// exclude entire root subtrees.
pub fn root_ancestor_key(path: &str) -> String {
    let mut key = String::with_capacity(PATH_LENGTH);
    key.push_str(root_segment(path));
    for _ in 1..MAX_TREE_LEVEL {
        key.push_str(PATH_DELIMITER);
        key.push_str(ZERO_STUB);
    }
    key
}

/// Number of occupied levels (1 for a root post).
pub fn depth(path: &str) -> usize {
    path.split(PATH_DELIMITER)
        .take_while(|segment| *segment != ZERO_STUB)
        .count()
}

/// The occupied leading part of a path, e.g. `0000042.0000057` for a
/// depth-2 post. Every descendant's path starts with it.
pub fn subtree_prefix(path: &str) -> &str {
    let occupied = depth(path);
    if occupied == 0 {
        return "";
    }
    let len = occupied * (MAX_ID_LENGTH + PATH_DELIMITER.len()) - PATH_DELIMITER.len();
    path.get(..len).unwrap_or(path)
}

/// Exclusive upper bound of the subtree rooted at `path`.
///
/// Every strict descendant `d` satisfies `path < d < subtree_end(path)` under
/// byte comparison, so a subtree is one range scan on the path index.
pub fn subtree_end(path: &str) -> String {
    let prefix = subtree_prefix(path);
    let mut end = String::with_capacity(prefix.len() + 1);
    end.push_str(prefix);
    end.push(SUBTREE_TERMINATOR);
    end
}

/// Whether `candidate` lies strictly below `ancestor` in the same tree.
pub fn is_descendant(ancestor: &str, candidate: &str) -> bool {
    let prefix = subtree_prefix(ancestor);
    !prefix.is_empty()
        && candidate.starts_with(prefix)
        && candidate[prefix.len()..].starts_with(PATH_DELIMITER)
        && depth(candidate) > depth(ancestor)
}

/// Decode the ids along a path, root first and the post itself last.
pub fn ancestry(path: &str) -> Vec<PostId> {
    path.split(PATH_DELIMITER)
        .take_while(|segment| *segment != ZERO_STUB)
        .filter_map(|segment| segment.parse().ok())
        .collect()
}
