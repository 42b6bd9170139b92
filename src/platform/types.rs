use crate::error::TrackerError;

/// Platform primitive for "what application is foreground right now".
///
/// Called once per tick; implementations must be cheap and must never block
/// indefinitely. `None` means the foreground application could not be
/// determined (lock screen, no focused window) — the tracker treats that as
/// idle time, not as an error.
pub trait ForegroundDetector: Send + Sync {
    fn foreground_application(&self) -> Option<String>;

    /// Two-phase consent gate: sampling starts only after a grant. Desktop
    /// detectors grant unconditionally; platforms with a real consent flow
    /// (mobile screen-time APIs) return `AuthorizationDenied` on refusal.
    fn request_authorization(&self) -> Result<(), TrackerError> {
        Ok(())
    }
}
