//! Webview embedding for Chromeless
//!
//! This module attaches a wry webview to the shell window, loads the
//! content document, and forwards control messages from the content
//! script to the event loop.

use crate::app::ShellEvent;
use crate::utils::error::{IntoShellError, Result};
use log::warn;
use tao::{event_loop::EventLoopProxy, window::Window};
use wry::{http::Request, WebView, WebViewBuilder};

pub mod content;
pub mod ipc;

use content::Content;

/// Attach a webview rendering the given content to a window
///
/// Control messages posted by the content script are parsed and sent to
/// the event loop through `proxy`; malformed messages are logged and
/// dropped.
pub fn build(window: &Window, proxy: EventLoopProxy<ShellEvent>, content: &Content) -> Result<WebView> {
    let builder = WebViewBuilder::new().with_ipc_handler(move |request: Request<String>| {
        match ipc::parse_request(request.body()) {
            Ok(control) => {
                if proxy.send_event(ShellEvent::Control(control)).is_err() {
                    warn!("Dropping control message: event loop has shut down");
                }
            }
            Err(e) => warn!("Ignoring control message: {}", e),
        }
    });

    let builder = match content {
        Content::Embedded => builder.with_html(content::DEFAULT_DOCUMENT),
        Content::File(url) => builder.with_url(url),
    };

    // On Linux the tao window is backed by GTK and the webview attaches to
    // its content box; elsewhere it builds on the raw window handle.
    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window).webview_err("Failed to create webview")?;

    #[cfg(target_os = "linux")]
    let webview = {
        use crate::utils::error::ChromelessError;
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;

        let vbox = window
            .default_vbox()
            .ok_or_else(|| ChromelessError::Webview("Window has no GTK content box".to_string()))?;
        builder.build_gtk(vbox).webview_err("Failed to create webview")?
    };

    Ok(webview)
}
