//! Tao window implementation for Chromeless
//!
//! This module creates the frameless shell window and embeds the webview
//! that renders the content document.

use crate::app::ShellEvent;
use crate::utils::config::WindowConfig;
use crate::utils::error::{IntoShellError, Result};
use crate::webview::{self, content::Content};
use crate::window::WindowControls;
use tao::{
    dpi::LogicalSize,
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    window::{Window as TaoWindow, WindowBuilder, WindowId},
};
use wry::WebView;

/// A frameless window together with the webview rendering its content
pub struct ShellWindow {
    /// Declared before the window so the webview is torn down first
    _webview: WebView,

    /// The underlying tao window
    window: TaoWindow,
}

impl ShellWindow {
    /// Create a new shell window with the given configuration
    ///
    /// The window is created without decorations; the content document
    /// provides the title bar. Control messages from the content script
    /// are forwarded to the event loop through `proxy`.
    pub fn new(
        target: &EventLoopWindowTarget<ShellEvent>,
        proxy: EventLoopProxy<ShellEvent>,
        config: &WindowConfig,
        content: &Content,
    ) -> Result<Self> {
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_decorations(false)
            .with_resizable(config.resizable)
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_always_on_top(config.always_on_top)
            .build(target)
            .window_err("Failed to create window")?;

        let webview = webview::build(&window, proxy, content)?;

        Ok(Self {
            _webview: webview,
            window,
        })
    }

    /// The window identifier used for event-loop dispatch
    pub fn id(&self) -> WindowId {
        self.window.id()
    }
}

impl WindowControls for ShellWindow {
    fn minimize(&self) {
        self.window.set_minimized(true);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn set_maximized(&self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn start_drag(&self) -> Result<()> {
        self.window
            .drag_window()
            .window_err("Failed to start window drag")
    }
}
