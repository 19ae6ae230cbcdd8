/// Primary keys of database-assigned (BIGSERIAL) rows.
pub type DbId = i64;

/// Post primary key. Assigned in-process by [`crate::id_gen::PostIdGenerator`],
/// never by the database.
pub type PostId = i64;

/// `parent` value of a post that starts a new reply tree.
pub const ROOT_PARENT: PostId = 0;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
