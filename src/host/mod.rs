//! Host shell integration
//!
//! The menu never touches a real windowing system. Everything it needs
//! from the outside world goes through these traits:
//! - `Host`: window registry, external links, dialogs, runtime facts
//! - `Window`: restore, content-layer messages, devtools, session
//! - `Session`: the browsing session cache

pub mod headless;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Browsing session attached to a window
pub trait Session: Send + Sync {
    /// Purge the HTTP cache; `on_done` runs once the purge has finished
    fn clear_cache(&self, on_done: Box<dyn FnOnce() + Send>);
}

/// Top-level application window
pub trait Window: Send + Sync {
    /// Stable identifier, used for logging only
    fn id(&self) -> u64;

    /// Bring a minimized window back before it receives input
    fn restore(&self);

    /// Fire-and-forget message to the window's content layer
    fn send(&self, action: Action);

    /// Toggle the window's own developer tools
    fn toggle_dev_tools(&self);

    fn session(&self) -> Arc<dyn Session>;
}

/// Window registry and shell services
pub trait Host: Send + Sync {
    /// All open top-level windows, in creation order
    fn windows(&self) -> Vec<Arc<dyn Window>>;

    /// Open a URL with the system handler
    fn open_external(&self, url: &str) -> Result<()>;

    /// Show a modal message box
    fn show_message_box(&self, message_box: MessageBox);

    /// Name and version of the runtime hosting the content layer
    fn runtime(&self) -> RuntimeInfo;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBox {
    pub kind: MessageKind,
    pub message: String,
    pub buttons: Vec<String>,
}

impl MessageBox {
    /// Informational box without buttons
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            message: message.into(),
            buttons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: String,
}

impl std::fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
