use objc2_app_kit::NSWorkspace;

use super::ForegroundDetector;

/// Asks NSWorkspace for the frontmost application's bundle identifier.
pub struct MacOsDetector;

impl MacOsDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacOsDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ForegroundDetector for MacOsDetector {
    fn foreground_application(&self) -> Option<String> {
        let workspace = unsafe { NSWorkspace::sharedWorkspace() };
        let app = unsafe { workspace.frontmostApplication() }?;
        // Apps without a bundle (bare executables) report no identifier;
        // those intervals fall into the idle bucket.
        let bundle_id = unsafe { app.bundleIdentifier() }?;
        Some(bundle_id.to_string())
    }
}
