//! Forum domain logic with no I/O.
//!
//! Holds the identifier types, the domain error, the post id generator and
//! the materialized-path codec that every reply tree is stored with, plus the
//! query model the thread traversal engine compiles into store queries.

pub mod error;
pub mod id_gen;
pub mod pagination;
pub mod post_batch;
pub mod post_path;
pub mod post_query;
pub mod thread_ref;
pub mod types;
pub mod vote;
