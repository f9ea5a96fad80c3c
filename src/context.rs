//! Application context handed to the menu builder and to every command

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::host::{Host, Window};
use crate::platform::{Platform, SystemInfo};

pub const DEFAULT_HELP_URL: &str = "https://zulipchat.com/help/";
pub const DEFAULT_ISSUES_URL: &str = "https://github.com/zulip/zulip-electron/issues/new";
pub const DEFAULT_THEME_DOCS_URL: &str = "https://electron.atom.io/docs/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "Zulip".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// External link targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub help: String,
    /// Issue tracker "new issue" page, without query
    pub issues: String,
    pub theme_docs: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            help: DEFAULT_HELP_URL.to_string(),
            issues: DEFAULT_ISSUES_URL.to_string(),
            theme_docs: DEFAULT_THEME_DOCS_URL.to_string(),
        }
    }
}

/// Everything a menu command may consult
///
/// The platform flag and system facts are captured once, at construction.
#[derive(Clone)]
pub struct AppContext {
    host: Arc<dyn Host>,
    platform: Platform,
    system: SystemInfo,
    app: AppInfo,
    links: Links,
}

impl AppContext {
    pub fn new(host: Arc<dyn Host>, platform: Platform, app: AppInfo, links: Links) -> Self {
        Self {
            host,
            platform,
            system: SystemInfo::detect(platform),
            app,
            links,
        }
    }

    /// Replace the detected OS facts
    pub fn with_system(mut self, system: SystemInfo) -> Self {
        self.system = system;
        self
    }

    /// The single application window: first entry of the host registry
    ///
    /// Looked up on every call, never cached.
    pub fn main_window(&self) -> Option<Arc<dyn Window>> {
        self.host.windows().into_iter().next()
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn system(&self) -> &SystemInfo {
        &self.system
    }

    pub fn app(&self) -> &AppInfo {
        &self.app
    }

    pub fn links(&self) -> &Links {
        &self.links
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("platform", &self.platform)
            .field("system", &self.system)
            .field("app", &self.app)
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
