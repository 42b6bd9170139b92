use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt, Window};

use super::ForegroundDetector;

/// Resolves the focused X11 window's WM_CLASS instance name, which stands in
/// for a bundle identifier on Linux.
pub struct LinuxDetector {
    conn: x11rb::rust_connection::RustConnection,
    root: Window,
}

impl LinuxDetector {
    pub fn new() -> Self {
        let (conn, screen_num) = x11rb::connect(None).expect("Failed to connect to X server");
        let screen = &conn.setup().roots[screen_num];
        let root = screen.root;

        Self { conn, root }
    }

    fn get_atom(&self, name: &str) -> Option<u32> {
        self.conn
            .intern_atom(false, name.as_bytes())
            .ok()?
            .reply()
            .ok()
            .map(|r| r.atom)
    }

    fn get_window_property(&self, window: Window, atom: u32) -> Option<String> {
        let reply = self
            .conn
            .get_property(false, window, atom, AtomEnum::ANY, 0, 1024)
            .ok()?
            .reply()
            .ok()?;

        if reply.value.is_empty() {
            return None;
        }

        String::from_utf8(reply.value).ok()
    }

    fn get_active_window_id(&self) -> Option<Window> {
        let atom = self.get_atom("_NET_ACTIVE_WINDOW")?;
        let reply = self
            .conn
            .get_property(false, self.root, atom, AtomEnum::WINDOW, 0, 1)
            .ok()?
            .reply()
            .ok()?;

        if reply.value.len() >= 4 {
            Some(u32::from_ne_bytes([
                reply.value[0],
                reply.value[1],
                reply.value[2],
                reply.value[3],
            ]))
        } else {
            None
        }
    }
}

impl Default for LinuxDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ForegroundDetector for LinuxDetector {
    fn foreground_application(&self) -> Option<String> {
        let window_id = self.get_active_window_id()?;

        // WM_CLASS holds two null-terminated strings; the first (instance
        // name) is the stable per-application key.
        let class = self.get_window_property(window_id, AtomEnum::WM_CLASS.into())?;
        let instance = class.split('\0').next()?;

        if instance.is_empty() {
            None
        } else {
            Some(instance.to_string())
        }
    }
}
