//! Thread vote DTO.

use serde::Deserialize;

/// A user's voice on a thread: `1` or `-1`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVote {
    pub nickname: String,
    pub voice: i16,
}
