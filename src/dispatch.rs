//! Action dispatch to the main window
//!
//! Menu commands never hold a window reference; each call resolves the
//! main window through the context and drops it afterwards.

use crate::action::Action;
use crate::context::AppContext;
use crate::host::MessageBox;

pub const CACHE_CLEARED_MESSAGE: &str = "Cache cleared!";

/// Forward `action` to the main window's content layer
///
/// Restores the window first on platforms where a minimized window would
/// not take focus. Without a window the action is dropped.
pub fn send_action(ctx: &AppContext, action: Action) {
    let Some(window) = ctx.main_window() else {
        log::warn!("No main window, dropping action '{}'", action);
        return;
    };

    if ctx.platform().restores_before_focus() {
        window.restore();
    }

    log::debug!("Sending '{}' to window {}", action, window.id());
    window.send(action);
}

/// Purge the main window's session cache, then confirm with a dialog
///
/// Repeated calls each start their own purge.
pub fn clear_cache(ctx: &AppContext) {
    let Some(window) = ctx.main_window() else {
        log::warn!("No main window, cannot clear cache");
        return;
    };

    log::info!("Clearing cache for window {}", window.id());
    let ctx = ctx.clone();
    window.session().clear_cache(Box::new(move || {
        log::info!("Cache purge finished");
        ctx.host().show_message_box(MessageBox::info(CACHE_CLEARED_MESSAGE));
    }));
}

/// Open `url` with the host shell, failures are logged only
pub fn open_external(ctx: &AppContext, url: &str) {
    log::info!("Opening {}", url);
    if let Err(e) = ctx.host().open_external(url) {
        log::error!("Failed to open {}: {:#}", url, e);
    }
}
