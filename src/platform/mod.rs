pub mod types;

pub use types::ForegroundDetector;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub use macos::MacOsDetector as NativeDetector;

#[cfg(target_os = "linux")]
pub use linux::LinuxDetector as NativeDetector;

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub use self::StubDetector as NativeDetector;

/// Fixed-identifier detector, used in tests and as the fallback on targets
/// without a native implementation.
pub struct StubDetector {
    identifier: String,
}

impl StubDetector {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
        }
    }
}

impl Default for StubDetector {
    fn default() -> Self {
        Self::new("com.example.stub")
    }
}

impl ForegroundDetector for StubDetector {
    fn foreground_application(&self) -> Option<String> {
        Some(self.identifier.clone())
    }
}
