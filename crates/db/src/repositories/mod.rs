//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod forum_repo;
pub mod post_repo;
pub mod service_repo;
pub mod thread_repo;
pub mod user_repo;
pub mod vote_repo;

pub use forum_repo::ForumRepo;
pub use post_repo::PostRepo;
pub use service_repo::ServiceRepo;
pub use thread_repo::ThreadRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
