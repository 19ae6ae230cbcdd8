//! Id and path assignment for a batch of new posts.
//!
//! Every post of a batch gets a fresh id from the shared generator and a path
//! derived from its parent's stored path. Parents are looked up once up front
//! and handed in as [`KnownParent`]s; a parent that is missing or lives in a
//! different thread fails the whole batch.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::id_gen::PostIdGenerator;
use crate::post_path::{derive_path, root_path};
use crate::types::{DbId, PostId, ROOT_PARENT};

pub const FOREIGN_PARENT: &str = "Parent post was created in another thread";

const EXHAUSTED_IDS: &str = "post id space exhausted";

/// Stored location of a post referenced as a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownParent {
    pub thread: DbId,
    pub path: String,
}

/// Identity assigned to one post of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub id: PostId,
    pub parent: PostId,
    pub path: String,
}

/// Assign ids and paths, in request order, to posts replying to `parents`.
pub fn place_batch(
    thread: DbId,
    parents: &[PostId],
    known: &HashMap<PostId, KnownParent>,
    ids: &PostIdGenerator,
) -> Result<Vec<Placement>, CoreError> {
    parents
        .iter()
        .map(|&parent| -> Result<Placement, CoreError> {
            let base = if parent == ROOT_PARENT {
                None
            } else {
                let found = known
                    .get(&parent)
                    .filter(|p| p.thread == thread)
                    .ok_or_else(|| CoreError::Conflict(FOREIGN_PARENT.to_string()))?;
                Some(found.path.as_str())
            };

            let id = ids
                .next()
                .ok_or_else(|| CoreError::Internal(EXHAUSTED_IDS.to_string()))?;
            let path = match base {
                None => root_path(id)?,
                Some(base) => derive_path(base, id)?,
            };
            Ok(Placement { id, parent, path })
        })
        .collect()
}
