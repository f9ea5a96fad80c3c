//! Menu tree types
//!
//! A `Menu` is an ordered list of top-level `MenuNode`s. Submenus are
//! `Arc<[MenuNode]>` so one fragment (History, View, Help...) can hang
//! under several parents without being copied.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;

use crate::accelerator::Accelerator;
use crate::command::Command;
use crate::context::AppContext;
use crate::host::Window;
use crate::platform::Platform;
use crate::role::Role;

/// Shared, read-only list of entries
pub type Submenu = Arc<[MenuNode]>;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuNode {
    Separator,
    Role(RoleItem),
    Leaf(ActionLeaf),
    /// Disabled informational entry
    Label { label: String },
    Submenu(SubmenuItem),
}

/// Entry whose behavior is supplied by the host shell
#[derive(Debug, Clone, Serialize)]
pub struct RoleItem {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<Accelerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Submenu>,
}

/// Clickable entry bound to a single command
#[derive(Debug, Clone, Serialize)]
pub struct ActionLeaf {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<Accelerator>,
    pub command: Command,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmenuItem {
    pub label: String,
    pub items: Submenu,
}

impl MenuNode {
    pub fn leaf(label: impl Into<String>, accelerator: Option<Accelerator>, command: Command) -> Self {
        MenuNode::Leaf(ActionLeaf {
            label: label.into(),
            accelerator,
            command,
        })
    }

    pub fn role(role: Role) -> Self {
        MenuNode::Role(RoleItem {
            role,
            accelerator: None,
            submenu: None,
        })
    }

    pub fn role_with_submenu(role: Role, submenu: Submenu) -> Self {
        MenuNode::Role(RoleItem {
            role,
            accelerator: None,
            submenu: Some(submenu),
        })
    }

    pub fn label(text: impl Into<String>) -> Self {
        MenuNode::Label { label: text.into() }
    }

    pub fn submenu(label: impl Into<String>, items: Submenu) -> Self {
        MenuNode::Submenu(SubmenuItem {
            label: label.into(),
            items,
        })
    }

    /// Text shown for the entry, `None` for separators
    pub fn title(&self) -> Option<&str> {
        match self {
            MenuNode::Separator => None,
            MenuNode::Role(item) => Some(item.role.default_label()),
            MenuNode::Leaf(leaf) => Some(&leaf.label),
            MenuNode::Label { label } => Some(label),
            MenuNode::Submenu(item) => Some(&item.label),
        }
    }

    pub fn children(&self) -> Option<&Submenu> {
        match self {
            MenuNode::Role(item) => item.submenu.as_ref(),
            MenuNode::Submenu(item) => Some(&item.items),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&ActionLeaf> {
        match self {
            MenuNode::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn accelerator(&self) -> Option<&Accelerator> {
        match self {
            MenuNode::Role(item) => item.accelerator.as_ref(),
            MenuNode::Leaf(leaf) => leaf.accelerator.as_ref(),
            _ => None,
        }
    }
}

impl ActionLeaf {
    /// Host entry point: the item was clicked with `focused` in front
    pub fn click(&self, ctx: &AppContext, focused: Option<&dyn Window>) {
        log::info!("Menu item '{}' clicked", self.label);
        self.command.invoke(ctx, focused);
    }
}

/// Top-level menu for one platform
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub platform: Platform,
    pub items: Vec<MenuNode>,
}

impl Menu {
    /// Find a node by label path (e.g. `&["View", "Reload"]`)
    ///
    /// Labels are matched case- and whitespace-insensitively, and a path
    /// segment may be a fragment of the label.
    pub fn find_by_path(&self, path: &[&str]) -> Option<&MenuNode> {
        find_by_path(&self.items, path)
    }

    /// First leaf bound to `accelerator` on this menu's platform
    pub fn find_by_accelerator(&self, accelerator: &Accelerator) -> Option<&ActionLeaf> {
        self.leaves().into_iter().find(|leaf| {
            leaf.accelerator
                .as_ref()
                .is_some_and(|a| a.matches(accelerator, self.platform))
        })
    }

    /// Every node in depth-first order
    pub fn flatten(&self) -> Vec<&MenuNode> {
        let mut result = Vec::new();
        flatten_into(&self.items, &mut result);
        result
    }

    pub fn leaves(&self) -> Vec<&ActionLeaf> {
        self.flatten().into_iter().filter_map(MenuNode::as_leaf).collect()
    }

    /// Indented text rendering, one entry per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_into(&self.items, 0, self.platform, &mut out);
        out
    }
}

fn find_by_path<'a>(nodes: &'a [MenuNode], path: &[&str]) -> Option<&'a MenuNode> {
    let (first, rest) = path.split_first()?;

    log::debug!("find_by_path: searching for '{}' in {} entries", first, nodes.len());

    let node = nodes
        .iter()
        .find(|node| node.title().is_some_and(|title| soft_match(title, first)))?;

    if rest.is_empty() {
        return Some(node);
    }

    match node.children() {
        Some(children) => find_by_path(children, rest),
        None => {
            log::debug!("'{}' has no children", first);
            None
        }
    }
}

fn flatten_into<'a>(nodes: &'a [MenuNode], result: &mut Vec<&'a MenuNode>) {
    for node in nodes {
        result.push(node);
        if let Some(children) = node.children() {
            flatten_into(children, result);
        }
    }
}

fn render_into(nodes: &[MenuNode], indent: usize, platform: Platform, out: &mut String) {
    for node in nodes {
        let prefix = "  ".repeat(indent);
        let line = match node {
            MenuNode::Separator => "---".to_string(),
            MenuNode::Role(item) => format!("{} <{}>", item.role.default_label(), item.role),
            MenuNode::Leaf(leaf) => leaf.label.clone(),
            MenuNode::Label { label } => format!("{} [DISABLED]", label),
            MenuNode::Submenu(item) => item.label.clone(),
        };
        let shortcut = node
            .accelerator()
            .map(|a| format!(" ({})", a.resolve(platform)))
            .unwrap_or_default();

        let _ = writeln!(out, "{}{}{}", prefix, line, shortcut);

        if let Some(children) = node.children() {
            render_into(children, indent + 1, platform, out);
        }
    }
}

/// Normalize a string for comparison: remove whitespace and lowercase
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Case- and whitespace-insensitive match, `needle` may be a fragment
///
/// A blank needle matches nothing.
fn soft_match(haystack: &str, needle: &str) -> bool {
    let haystack = normalize(haystack);
    let needle = normalize(needle);
    if needle.is_empty() {
        return false;
    }

    haystack == needle || haystack.contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::accelerator::Modifier;

    fn sample() -> Menu {
        let history: Submenu = Arc::from(vec![
            MenuNode::leaf(
                "Back",
                Some(Accelerator::new([Modifier::Alt], crate::accelerator::Key::Left)),
                Command::Dispatch(Action::Back),
            ),
            MenuNode::Separator,
            MenuNode::leaf("Forward", None, Command::Dispatch(Action::Forward)),
        ]);
        let view: Submenu = Arc::from(vec![
            MenuNode::leaf(
                "Zoom In",
                Some(Accelerator::char([Modifier::CommandOrControl], '=')),
                Command::Dispatch(Action::ZoomIn),
            ),
            MenuNode::role(Role::ToggleFullscreen),
            MenuNode::label("Version 1"),
        ]);
        Menu {
            platform: Platform::Linux,
            items: vec![
                MenuNode::submenu("History", history),
                MenuNode::submenu("View", view),
            ],
        }
    }

    #[test]
    fn test_find_by_path_soft_matches() {
        let menu = sample();
        let node = menu.find_by_path(&["history", "back"]).unwrap();
        assert_eq!(node.title(), Some("Back"));

        let node = menu.find_by_path(&["VIEW", "zoomin"]).unwrap();
        assert_eq!(node.title(), Some("Zoom In"));

        assert!(menu.find_by_path(&["View", "Reload"]).is_none());
        assert!(menu.find_by_path(&["History", "Back", "Deeper"]).is_none());
        assert!(menu.find_by_path(&[]).is_none());
    }

    #[test]
    fn test_find_by_path_rejects_blank_segments() {
        let menu = sample();
        let segments: Vec<&str> = "View/".split('/').map(str::trim).collect();
        assert!(menu.find_by_path(&segments).is_none());
        assert!(menu.find_by_path(&["", "Back"]).is_none());
        assert!(menu.find_by_path(&["History", "   "]).is_none());
    }

    #[test]
    fn test_flatten_is_depth_first() {
        let menu = sample();
        let titles: Vec<Option<&str>> = menu.flatten().into_iter().map(MenuNode::title).collect();
        assert_eq!(
            titles,
            vec![
                Some("History"),
                Some("Back"),
                None,
                Some("Forward"),
                Some("View"),
                Some("Zoom In"),
                Some("Toggle Full Screen"),
                Some("Version 1"),
            ]
        );
        assert_eq!(menu.leaves().len(), 3);
    }

    #[test]
    fn test_find_by_accelerator_resolves_platform() {
        let menu = sample();
        let ctrl_eq: Accelerator = "Ctrl+=".parse().unwrap();
        assert_eq!(menu.find_by_accelerator(&ctrl_eq).unwrap().label, "Zoom In");

        let cmd_eq: Accelerator = "Cmd+=".parse().unwrap();
        assert!(menu.find_by_accelerator(&cmd_eq).is_none());
    }

    #[test]
    fn test_render() {
        let rendered = sample().render();
        assert_eq!(
            rendered,
            "History\n  Back (Alt+Left)\n  ---\n  Forward\nView\n  Zoom In (Ctrl+=)\n  Toggle Full Screen <togglefullscreen>\n  Version 1 [DISABLED]\n"
        );
    }

    #[test]
    fn test_serialize_tags_node_types() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["platform"], "linux");
        let back = &json["items"][0]["items"][0];
        assert_eq!(back["type"], "leaf");
        assert_eq!(back["label"], "Back");
        assert_eq!(back["accelerator"], "Alt+Left");
        assert_eq!(back["command"]["dispatch"], "back");
        assert_eq!(json["items"][0]["items"][1]["type"], "separator");
        assert_eq!(json["items"][1]["items"][1]["role"], "togglefullscreen");
    }

    #[test]
    fn test_soft_match() {
        assert!(soft_match("Log Out", "logout"));
        assert!(soft_match("Report an Issue...", "report"));
        assert!(!soft_match("Reload", "forward"));
        assert!(!soft_match("Reload", ""));
        assert!(!soft_match("Reload", " \t"));
    }
}
