//! Query model for reading a thread's posts.
//!
//! The traversal engine describes each read as a [`PostQuery`]: a list of
//! filter predicates, one ordering, a direction and an optional limit. Store
//! implementations translate it into their own query language (bound SQL
//! parameters for PostgreSQL), so no caller ever assembles query text.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{DbId, PostId};

/// Retrieval order requested with `?sort=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostSort {
    /// Creation order, ignoring the reply tree.
    #[default]
    Flat,
    /// Full pre-order of the reply tree.
    Tree,
    /// Root posts paginated, each followed by its whole subtree.
    ParentTree,
}

impl FromStr for PostSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "tree" => Ok(Self::Tree),
            "parent_tree" => Ok(Self::ParentTree),
            other => Err(CoreError::Validation(format!(
                "unknown sort method: {other}"
            ))),
        }
    }
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::Tree => "tree",
            Self::ParentTree => "parent_tree",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn from_desc(desc: bool) -> Self {
        if desc {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Comparison that keeps rows strictly after a `since` cursor when
    /// walking in this direction.
    pub fn after(self) -> Comparison {
        match self {
            Self::Asc => Comparison::Greater,
            Self::Desc => Comparison::Less,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
}

impl Comparison {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
        }
    }

    /// Evaluate `left <op> right`.
    pub fn holds<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Greater => left > right,
            Self::Less => left < right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    /// Posts of one thread.
    Thread(DbId),
    /// `id <op> value`.
    Id(Comparison, PostId),
    /// `path <op> value`, compared bytewise.
    Path(Comparison, String),
    /// `parent = 0`.
    RootsOnly,
    /// Strict descendants of the post stored at the given path.
    Descendants(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    /// `(created, id)`.
    Created,
    /// Materialized path.
    Path,
    /// Post id.
    Id,
}

/// One read against the post store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub filters: Vec<PostFilter>,
    pub order: PostOrder,
    pub direction: Direction,
    pub limit: Option<i64>,
}

impl PostQuery {
    /// All posts of `thread` in ascending creation order.
    pub fn in_thread(thread: DbId) -> Self {
        Self {
            filters: vec![PostFilter::Thread(thread)],
            order: PostOrder::Created,
            direction: Direction::Asc,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: PostFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, order: PostOrder, direction: Direction) -> Self {
        self.order = order;
        self.direction = direction;
        self
    }

    pub fn limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }
}
