//! Process-local post id generator.
//!
//! Post ids are handed out before the row is inserted because the row's
//! materialized path embeds its own id. A single atomic counter is the only
//! in-process state mutated by concurrent post creation.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::types::PostId;

/// Strictly increasing source of post ids.
///
/// Constructed once at startup and shared behind an `Arc`. Never yields `0`,
/// which is reserved as the "no parent" sentinel, and never yields an id
/// twice: once the counter reaches `u32::MAX` it stays exhausted.
#[derive(Debug, Default)]
pub struct PostIdGenerator {
    current: AtomicU32,
}

impl PostIdGenerator {
    /// A generator whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// A generator whose first id is `last + 1`.
    ///
    /// Seed with the highest id already in the store so ids stay unique
    /// across restarts.
    pub fn starting_after(last: u32) -> Self {
        Self {
            current: AtomicU32::new(last),
        }
    }

    /// Reserve the next id, or `None` once the id space is used up.
    pub fn next(&self) -> Option<PostId> {
        self.current
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .ok()
            .map(|previous| PostId::from(previous) + 1)
    }

    /// The most recently issued id, or the seed if none was issued yet.
    pub fn last(&self) -> PostId {
        PostId::from(self.current.load(Ordering::Relaxed))
    }
}
