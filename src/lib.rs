//! Native application menu for the Zulip desktop shell
//!
//! Menu entries never run application logic. A leaf either asks the host
//! for something directly (open a link, purge the cache, toggle devtools)
//! or sends a named [`Action`] to the main window's content layer.
//!
//! ```ignore
//! let ctx = AppContext::new(host, Platform::detect(), AppInfo::default(), Links::default());
//! let menu = template::build_menu(&ctx);
//! ```

pub mod accelerator;
pub mod action;
pub mod async_runtime;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod host;
pub mod menu;
pub mod platform;
pub mod report;
pub mod role;
pub mod template;

pub use action::Action;
pub use command::Command;
pub use context::{AppContext, AppInfo, Links};
pub use menu::{ActionLeaf, Menu, MenuNode};
pub use platform::Platform;
pub use role::Role;
pub use template::build_menu;
