//! Actions the menu forwards to the content layer
//!
//! The string form of each variant is the event name the content layer
//! listens for, so the enum is the whole contract between the two sides.

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Action {
    #[strum(serialize = "back")]
    Back,
    #[strum(serialize = "forward")]
    Forward,
    #[strum(serialize = "reload")]
    Reload,
    #[strum(serialize = "zoomIn")]
    ZoomIn,
    #[strum(serialize = "zoomOut")]
    ZoomOut,
    #[strum(serialize = "zoomActualSize")]
    ZoomActualSize,
    #[strum(serialize = "toggletray")]
    ToggleTray,
    #[strum(serialize = "tab-devtools")]
    TabDevTools,
    #[strum(serialize = "open-about")]
    OpenAbout,
    #[strum(serialize = "open-settings")]
    OpenSettings,
    #[strum(serialize = "shortcut")]
    Shortcut,
    #[strum(serialize = "log-out")]
    LogOut,
}

impl Action {
    /// Event name sent to the content layer
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
