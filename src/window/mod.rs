//! Window management module for Chromeless
//!
//! This module handles creation of the frameless shell window and the
//! custom control operations that replace the native title bar.

use crate::utils::error::Result;
use log::warn;
use serde::Deserialize;

pub mod shell_window;
pub use shell_window::ShellWindow;

/// Control requests posted by the window-content script
///
/// Each variant corresponds to one message on the webview IPC channel,
/// carried as `{"cmd": "<name>"}` with the name in kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum ControlRequest {
    /// Close the window
    Close,

    /// Minimize the window
    Minimize,

    /// Maximize the window, or restore it if already maximized
    ToggleMaximize,

    /// Begin an interactive window move from the title-bar drag region
    Drag,
}

/// Window operations available to control dispatch
///
/// Implemented by the live shell window. The seam keeps the dispatch
/// rules testable without a display connection.
pub trait WindowControls {
    /// Minimize the window
    fn minimize(&self);

    /// Whether the window is currently maximized
    fn is_maximized(&self) -> bool;

    /// Set or clear the maximized state
    fn set_maximized(&self, maximized: bool);

    /// Begin an interactive window move
    fn start_drag(&self) -> Result<()>;
}

/// Apply a control request to a window
///
/// The maximized state is queried from the window itself rather than
/// cached, so the toggle cannot drift from the real window state.
/// `Close` is not handled here: closing destroys the window object and
/// is the application controller's job.
pub fn apply_control<W: WindowControls>(window: &W, request: ControlRequest) {
    match request {
        ControlRequest::Close => {}
        ControlRequest::Minimize => window.minimize(),
        ControlRequest::ToggleMaximize => {
            let maximized = window.is_maximized();
            window.set_maximized(!maximized);
        }
        ControlRequest::Drag => {
            if let Err(e) = window.start_drag() {
                warn!("Window drag failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ChromelessError;
    use std::cell::Cell;

    #[derive(Default)]
    struct StubWindow {
        minimized: Cell<bool>,
        maximized: Cell<bool>,
        drag_started: Cell<bool>,
    }

    impl WindowControls for StubWindow {
        fn minimize(&self) {
            self.minimized.set(true);
        }

        fn is_maximized(&self) -> bool {
            self.maximized.get()
        }

        fn set_maximized(&self, maximized: bool) {
            self.maximized.set(maximized);
        }

        fn start_drag(&self) -> Result<()> {
            self.drag_started.set(true);
            Ok(())
        }
    }

    struct NoDragWindow;

    impl WindowControls for NoDragWindow {
        fn minimize(&self) {}

        fn is_maximized(&self) -> bool {
            false
        }

        fn set_maximized(&self, _maximized: bool) {}

        fn start_drag(&self) -> Result<()> {
            Err(ChromelessError::Window("Drag unsupported".to_string()))
        }
    }

    #[test]
    fn test_minimize_control() {
        let window = StubWindow::default();
        apply_control(&window, ControlRequest::Minimize);
        assert!(window.minimized.get());
        assert!(!window.maximized.get());
    }

    #[test]
    fn test_maximize_toggle_round_trip() {
        let window = StubWindow::default();

        apply_control(&window, ControlRequest::ToggleMaximize);
        assert!(window.maximized.get());

        apply_control(&window, ControlRequest::ToggleMaximize);
        assert!(!window.maximized.get());
    }

    #[test]
    fn test_drag_control() {
        let window = StubWindow::default();
        apply_control(&window, ControlRequest::Drag);
        assert!(window.drag_started.get());
    }

    #[test]
    fn test_drag_failure_is_swallowed() {
        // A platform refusing the drag must not take down the shell
        apply_control(&NoDragWindow, ControlRequest::Drag);
    }

    #[test]
    fn test_close_left_to_controller() {
        let window = StubWindow::default();
        apply_control(&window, ControlRequest::Close);
        assert!(!window.minimized.get());
        assert!(!window.maximized.get());
        assert!(!window.drag_started.get());
    }
}
