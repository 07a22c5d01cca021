//! Application controller for Chromeless
//!
//! This module owns the event loop and the window lifecycle: create the
//! window when the loop starts, apply control requests arriving from the
//! content script, and decide when closing the last window terminates
//! the process.

use crate::utils::config::WindowConfig;
use crate::webview::content::Content;
use crate::window::{self, ControlRequest, ShellWindow};
use log::{debug, error, info};
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowId,
};

/// Events delivered to the event loop from outside the windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// A control request posted by the window-content script
    Control(ControlRequest),
}

/// Whether closing the last window should terminate the process
///
/// macOS convention keeps applications resident until they quit
/// explicitly; everywhere else the shell exits with its last window.
pub fn quit_on_all_windows_closed() -> bool {
    !cfg!(target_os = "macos")
}

/// The application shell: one frameless window plus its lifecycle rules
pub struct AppShell {
    config: WindowConfig,
    content: Content,
    window: Option<ShellWindow>,
}

impl AppShell {
    /// Create a shell that opens a window with the given configuration
    pub fn new(config: WindowConfig, content: Content) -> Self {
        Self {
            config,
            content,
            window: None,
        }
    }

    /// Run the event loop
    ///
    /// Takes over the calling thread and never returns; process exit is
    /// driven by the lifecycle rules above.
    pub fn run(mut self, event_loop: EventLoop<ShellEvent>) -> ! {
        let proxy = event_loop.create_proxy();

        event_loop.run(move |event, target, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::NewEvents(StartCause::Init) => {
                    match ShellWindow::new(target, proxy.clone(), &self.config, &self.content) {
                        Ok(win) => {
                            info!(
                                "Created {}x{} frameless window",
                                self.config.width, self.config.height
                            );
                            self.window = Some(win);
                        }
                        Err(e) => {
                            error!("Failed to create window: {}", e);
                            *control_flow = ControlFlow::ExitWithCode(1);
                        }
                    }
                }

                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    window_id,
                    ..
                } => {
                    self.close_window(window_id, control_flow);
                }

                Event::UserEvent(ShellEvent::Control(request)) => {
                    self.apply(request, control_flow);
                }

                // Dock re-activation: reopen a window if none remain
                #[cfg(target_os = "macos")]
                Event::Reopen {
                    has_visible_windows,
                    ..
                } => {
                    if !has_visible_windows && self.window.is_none() {
                        match ShellWindow::new(target, proxy.clone(), &self.config, &self.content) {
                            Ok(win) => {
                                info!("Re-created window on activation");
                                self.window = Some(win);
                            }
                            Err(e) => error!("Failed to re-create window: {}", e),
                        }
                    }
                }

                _ => {}
            }
        })
    }

    /// Apply a control request to the live window
    fn apply(&mut self, request: ControlRequest, control_flow: &mut ControlFlow) {
        debug!("Control request: {:?}", request);

        if request == ControlRequest::Close {
            if let Some(id) = self.window.as_ref().map(ShellWindow::id) {
                self.close_window(id, control_flow);
            }
            return;
        }

        if let Some(win) = &self.window {
            window::apply_control(win, request);
        }
    }

    /// Drop the window with the given id and exit if it was the last one
    fn close_window(&mut self, window_id: WindowId, control_flow: &mut ControlFlow) {
        match &self.window {
            Some(win) if win.id() == window_id => {
                info!("Window closed");
                self.window = None;
                if quit_on_all_windows_closed() {
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_convention_follows_platform() {
        #[cfg(target_os = "macos")]
        assert!(!quit_on_all_windows_closed());

        #[cfg(not(target_os = "macos"))]
        assert!(quit_on_all_windows_closed());
    }
}
