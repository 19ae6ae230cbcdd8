//! Thread references taken from the URL.
//!
//! Thread routes accept either the numeric id or the slug in the same path
//! segment. Slugs are never purely numeric, so a positive integer is always
//! read as an id.

use std::fmt;

use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadRef {
    Id(DbId),
    Slug(String),
}

impl ThreadRef {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<DbId>() {
            Ok(id) if id > 0 => Self::Id(id),
            _ => Self::Slug(raw.to_string()),
        }
    }
}

impl fmt::Display for ThreadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}
