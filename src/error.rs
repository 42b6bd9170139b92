use std::time::SystemTime;

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The wall clock moved backward between two samples. The offending
    /// sample is discarded; the accumulator is left untouched.
    #[error("clock skew: observation at {now:?} precedes previous observation at {last:?}")]
    ClockSkew { last: SystemTime, now: SystemTime },

    /// The platform refused screen-time authorization; sampling never starts.
    #[error("screen time authorization denied")]
    AuthorizationDenied,
}
