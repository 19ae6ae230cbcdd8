//! Thread vote rules.
//!
//! Each user holds at most one voice per thread. Re-voting replaces the
//! previous voice and the thread tally moves by the difference.

use crate::error::CoreError;

pub const UPVOTE: i16 = 1;
pub const DOWNVOTE: i16 = -1;

pub fn validate_voice(voice: i16) -> Result<i16, CoreError> {
    match voice {
        UPVOTE | DOWNVOTE => Ok(voice),
        other => Err(CoreError::Validation(format!(
            "voice must be 1 or -1, got {other}"
        ))),
    }
}

/// Change applied to a thread's tally when a user's voice becomes `voice`.
pub fn tally_delta(previous: Option<i16>, voice: i16) -> i64 {
    i64::from(voice) - i64::from(previous.unwrap_or(0))
}
