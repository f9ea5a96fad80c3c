//! Menu templates for the primary platform and for everything else
//!
//! History, View, Help and Experiment are built once per menu and the same
//! `Submenu` is referenced wherever it appears.

use std::sync::Arc;

use crate::accelerator::{Accelerator, Key, Modifier};
use crate::action::Action;
use crate::command::Command;
use crate::context::AppContext;
use crate::menu::{Menu, MenuNode, RoleItem, Submenu};
use crate::role::Role;

// ====== Shared fragments ======

/// Submenus shared by both platform templates
#[derive(Debug, Clone)]
pub struct Fragments {
    pub history: Submenu,
    pub view: Submenu,
    pub help: Submenu,
    pub experiment: Submenu,
}

impl Fragments {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            history: history_submenu(ctx),
            view: view_submenu(ctx),
            help: help_submenu(ctx),
            experiment: experiment_submenu(ctx),
        }
    }
}

fn history_submenu(ctx: &AppContext) -> Submenu {
    let (back, forward) = if ctx.platform().is_primary() {
        (
            Accelerator::char([Modifier::Command], '['),
            Accelerator::char([Modifier::Command], ']'),
        )
    } else {
        (
            Accelerator::new([Modifier::Alt], Key::Left),
            Accelerator::new([Modifier::Alt], Key::Right),
        )
    };

    Arc::from(vec![
        MenuNode::leaf("Back", Some(back), Command::Dispatch(Action::Back)),
        MenuNode::leaf("Forward", Some(forward), Command::Dispatch(Action::Forward)),
    ])
}

fn view_submenu(ctx: &AppContext) -> Submenu {
    let (app_devtools, tab_devtools) = if ctx.platform().is_primary() {
        (
            Accelerator::char([Modifier::Alt, Modifier::Command], 'i'),
            Accelerator::char([Modifier::Alt, Modifier::Command], 'u'),
        )
    } else {
        (
            Accelerator::char([Modifier::Control, Modifier::Shift], 'i'),
            Accelerator::char([Modifier::Control, Modifier::Shift], 'u'),
        )
    };

    Arc::from(vec![
        MenuNode::leaf("Reload", None, Command::Dispatch(Action::Reload)),
        MenuNode::Separator,
        MenuNode::role(Role::ToggleFullscreen),
        MenuNode::leaf(
            "Zoom In",
            Some(Accelerator::char([Modifier::CommandOrControl], '=')),
            Command::Dispatch(Action::ZoomIn),
        ),
        MenuNode::leaf(
            "Zoom Out",
            Some(Accelerator::char([Modifier::CommandOrControl], '-')),
            Command::Dispatch(Action::ZoomOut),
        ),
        MenuNode::leaf(
            "Actual Size",
            Some(Accelerator::char([Modifier::CommandOrControl], '0')),
            Command::Dispatch(Action::ZoomActualSize),
        ),
        MenuNode::Separator,
        MenuNode::leaf(
            "Toggle Tray Icon",
            None,
            Command::SendToFocused(Action::ToggleTray),
        ),
        MenuNode::leaf(
            format!("Toggle DevTools for {} App", ctx.app().name),
            Some(app_devtools),
            Command::ToggleDevTools,
        ),
        MenuNode::leaf(
            "Toggle DevTools for Active Tab",
            Some(tab_devtools),
            Command::Dispatch(Action::TabDevTools),
        ),
    ])
}

fn help_submenu(ctx: &AppContext) -> Submenu {
    let app = ctx.app();
    Arc::from(vec![
        MenuNode::leaf(
            format!("{} Website", app.name),
            None,
            Command::OpenUrl(ctx.links().help.clone()),
        ),
        MenuNode::label(format!("{}Desktop - {}", app.name, app.version)),
        MenuNode::leaf("Report an Issue...", None, Command::ReportIssue),
    ])
}

fn experiment_submenu(ctx: &AppContext) -> Submenu {
    Arc::from(vec![MenuNode::leaf(
        "Theme",
        None,
        Command::OpenUrl(ctx.links().theme_docs.clone()),
    )])
}

// ====== Platform templates ======

/// Build the menu for the context's platform
///
/// Only the selected template is constructed.
pub fn build_menu(ctx: &AppContext) -> Menu {
    let fragments = Fragments::new(ctx);
    let items = if ctx.platform().is_primary() {
        primary_template(ctx, &fragments)
    } else {
        other_template(ctx, &fragments)
    };

    log::info!(
        "Built {} menu with {} top-level entries",
        ctx.platform(),
        items.len()
    );

    Menu {
        platform: ctx.platform(),
        items,
    }
}

fn about_leaf(ctx: &AppContext) -> MenuNode {
    MenuNode::leaf(
        format!("{} desktop", ctx.app().name),
        None,
        Command::Dispatch(Action::OpenAbout),
    )
}

/// Application menu first, then Edit/View/History/Window/Help
fn primary_template(ctx: &AppContext, fragments: &Fragments) -> Vec<MenuNode> {
    let app_menu: Submenu = Arc::from(vec![
        about_leaf(ctx),
        MenuNode::Separator,
        MenuNode::leaf(
            "Settings",
            Some(Accelerator::char([Modifier::Command], ',')),
            Command::Dispatch(Action::OpenSettings),
        ),
        MenuNode::leaf(
            "Keyboard shortcuts",
            Some(Accelerator::char([Modifier::Command], 'k')),
            Command::Dispatch(Action::Shortcut),
        ),
        MenuNode::Separator,
        MenuNode::leaf("Clear Cache", None, Command::ClearCache),
        MenuNode::leaf(
            "Log Out",
            Some(Accelerator::char([Modifier::Command], 'l')),
            Command::Dispatch(Action::LogOut),
        ),
        MenuNode::Separator,
        MenuNode::role_with_submenu(Role::Services, Arc::from(Vec::new())),
        MenuNode::Separator,
        MenuNode::role(Role::Hide),
        MenuNode::role(Role::HideOthers),
        MenuNode::role(Role::Unhide),
        MenuNode::Separator,
        MenuNode::role(Role::Quit),
    ]);

    let edit_menu: Submenu = Arc::from(vec![
        MenuNode::role(Role::Undo),
        MenuNode::role(Role::Redo),
        MenuNode::Separator,
        MenuNode::role(Role::Cut),
        MenuNode::role(Role::Copy),
        MenuNode::role(Role::Paste),
        MenuNode::role(Role::PasteAndMatchStyle),
        MenuNode::role(Role::Delete),
        MenuNode::role(Role::SelectAll),
    ]);

    let window_menu: Submenu = Arc::from(vec![
        MenuNode::role(Role::Minimize),
        MenuNode::role(Role::Close),
        MenuNode::Separator,
        MenuNode::role(Role::Front),
    ]);

    vec![
        MenuNode::submenu(ctx.app().name.clone(), app_menu),
        MenuNode::submenu("Edit", edit_menu),
        MenuNode::submenu("View", fragments.view.clone()),
        MenuNode::submenu("History", fragments.history.clone()),
        MenuNode::role_with_submenu(Role::Window, window_menu),
        MenuNode::role_with_submenu(Role::Help, fragments.help.clone()),
    ]
}

/// Application actions folded into File, plus the Experiment menu
fn other_template(ctx: &AppContext, fragments: &Fragments) -> Vec<MenuNode> {
    let file_menu: Submenu = Arc::from(vec![
        about_leaf(ctx),
        MenuNode::Separator,
        MenuNode::leaf(
            "Settings",
            Some(Accelerator::char([Modifier::Control], ',')),
            Command::Dispatch(Action::OpenSettings),
        ),
        MenuNode::Separator,
        MenuNode::leaf(
            "Keyboard shortcuts",
            Some(Accelerator::char([Modifier::Control], 'k')),
            Command::Dispatch(Action::Shortcut),
        ),
        MenuNode::Separator,
        MenuNode::leaf("Clear Cache", None, Command::ClearCache),
        MenuNode::leaf(
            "Log Out",
            Some(Accelerator::char([Modifier::Control], 'l')),
            Command::Dispatch(Action::LogOut),
        ),
        MenuNode::Separator,
        MenuNode::Role(RoleItem {
            role: Role::Quit,
            accelerator: Some(Accelerator::char([Modifier::Control], 'q')),
            submenu: None,
        }),
    ]);

    let edit_menu: Submenu = Arc::from(vec![
        MenuNode::role(Role::Undo),
        MenuNode::role(Role::Redo),
        MenuNode::Separator,
        MenuNode::role(Role::Cut),
        MenuNode::role(Role::Copy),
        MenuNode::role(Role::Paste),
        MenuNode::role(Role::PasteAndMatchStyle),
        MenuNode::role(Role::Delete),
        MenuNode::Separator,
        MenuNode::role(Role::SelectAll),
    ]);

    vec![
        MenuNode::submenu("File", file_menu),
        MenuNode::submenu("Edit", edit_menu),
        MenuNode::submenu("View", fragments.view.clone()),
        MenuNode::submenu("History", fragments.history.clone()),
        MenuNode::role_with_submenu(Role::Help, fragments.help.clone()),
        MenuNode::submenu("Experiment", fragments.experiment.clone()),
    ]
}
