//! What a menu leaf does when clicked

use serde::Serialize;

use crate::action::Action;
use crate::context::AppContext;
use crate::dispatch;
use crate::host::Window;
use crate::report;

/// Either one action sent to one window, or one direct host operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Send to the main window, only when a window has focus
    Dispatch(Action),
    /// Send straight to the focused window
    SendToFocused(Action),
    /// Toggle the focused window's own devtools
    ToggleDevTools,
    ClearCache,
    OpenUrl(String),
    /// Open the issue tracker with a prefilled body
    ReportIssue,
}

impl Command {
    /// Invoke with the host-provided focused window
    pub fn invoke(&self, ctx: &AppContext, focused: Option<&dyn Window>) {
        match self {
            Command::Dispatch(action) => {
                if focused.is_some() {
                    dispatch::send_action(ctx, *action);
                } else {
                    log::debug!("Ignoring '{}' without a focused window", action);
                }
            }
            Command::SendToFocused(action) => match focused {
                Some(window) => window.send(*action),
                None => log::debug!("Ignoring '{}' without a focused window", action),
            },
            Command::ToggleDevTools => {
                if let Some(window) = focused {
                    window.toggle_dev_tools();
                }
            }
            Command::ClearCache => dispatch::clear_cache(ctx),
            Command::OpenUrl(url) => dispatch::open_external(ctx, url),
            Command::ReportIssue => dispatch::open_external(ctx, &report::issue_url(ctx)),
        }
    }

    /// The action this command sends, if it is a sending command
    pub fn sent_action(&self) -> Option<Action> {
        match self {
            Command::Dispatch(action) | Command::SendToFocused(action) => Some(*action),
            _ => None,
        }
    }
}
