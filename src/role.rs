//! Host-delegated menu roles
//!
//! A role entry carries no behavior of its own: the windowing layer maps
//! it onto its built-in implementation (quit, undo, the services menu...).

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    PasteAndMatchStyle,
    Delete,
    SelectAll,
    ToggleFullscreen,
    Services,
    Hide,
    HideOthers,
    Unhide,
    Quit,
    Minimize,
    Close,
    Front,
    Window,
    Help,
}

impl Role {
    /// Role identifier understood by the host shell
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Label the host shows when the entry does not override it
    pub fn default_label(self) -> &'static str {
        match self {
            Role::Undo => "Undo",
            Role::Redo => "Redo",
            Role::Cut => "Cut",
            Role::Copy => "Copy",
            Role::Paste => "Paste",
            Role::PasteAndMatchStyle => "Paste and Match Style",
            Role::Delete => "Delete",
            Role::SelectAll => "Select All",
            Role::ToggleFullscreen => "Toggle Full Screen",
            Role::Services => "Services",
            Role::Hide => "Hide",
            Role::HideOthers => "Hide Others",
            Role::Unhide => "Show All",
            Role::Quit => "Quit",
            Role::Minimize => "Minimize",
            Role::Close => "Close",
            Role::Front => "Bring All to Front",
            Role::Window => "Window",
            Role::Help => "Help",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
