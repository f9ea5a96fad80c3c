//! Keyboard accelerators for menu leaves
//!
//! Accelerators are written as `Modifier+Modifier+Key`, e.g. `Cmd+,`,
//! `Alt+Left` or `CommandOrControl+=`. `CommandOrControl` is resolved
//! against the platform flag when the menu is rendered.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Serialize, Serializer};

use crate::platform::Platform;

// ====== Modifiers ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    CommandOrControl,
    Command,
    Control,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    fn canonical(self) -> &'static str {
        match self {
            Modifier::CommandOrControl => "CmdOrCtrl",
            Modifier::Command => "Cmd",
            Modifier::Control => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    }
}

/// Look up a modifier by name (case-insensitive)
fn modifier_from_name(name: &str) -> Option<Modifier> {
    match name.to_lowercase().as_str() {
        "commandorcontrol" | "cmdorctrl" | "cmdorcontrol" | "commandorctrl" => {
            Some(Modifier::CommandOrControl)
        }
        "command" | "cmd" => Some(Modifier::Command),
        "control" | "ctrl" => Some(Modifier::Control),
        "alt" | "option" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

// ====== Keys ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable key, letters stored uppercase
    Char(char),
    /// F1..F24
    Function(u8),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    fn canonical(self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Function(n) => format!("F{}", n),
            Key::Left => "Left".to_string(),
            Key::Right => "Right".to_string(),
            Key::Up => "Up".to_string(),
            Key::Down => "Down".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Space => "Space".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Delete => "Delete".to_string(),
            Key::Home => "Home".to_string(),
            Key::End => "End".to_string(),
            Key::PageUp => "PageUp".to_string(),
            Key::PageDown => "PageDown".to_string(),
        }
    }
}

/// Look up a key by name, single characters map to themselves
fn key_from_name(name: &str) -> Option<Key> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_whitespace() || c.is_control() {
            return None;
        }
        return Some(Key::Char(c.to_ascii_uppercase()));
    }

    let lower = name.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=24).contains(&n).then_some(Key::Function(n));
    }

    match lower.as_str() {
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "enter" | "return" => Some(Key::Enter),
        "escape" | "esc" => Some(Key::Escape),
        "tab" => Some(Key::Tab),
        "space" => Some(Key::Space),
        "backspace" => Some(Key::Backspace),
        "delete" | "del" => Some(Key::Delete),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "pageup" => Some(Key::PageUp),
        "pagedown" => Some(Key::PageDown),
        "plus" => Some(Key::Char('+')),
        _ => None,
    }
}

// ====== Accelerator ======

/// A key plus an ordered, de-duplicated set of modifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accelerator {
    modifiers: Vec<Modifier>,
    key: Key,
}

impl Accelerator {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        let mut modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        modifiers.sort();
        modifiers.dedup();
        Self { modifiers, key }
    }

    /// Shorthand for a printable key
    pub fn char(modifiers: impl IntoIterator<Item = Modifier>, c: char) -> Self {
        Self::new(modifiers, Key::Char(c.to_ascii_uppercase()))
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Replace `CommandOrControl` with the platform's concrete modifier
    pub fn resolve(&self, platform: Platform) -> Accelerator {
        let concrete = if platform.is_primary() {
            Modifier::Command
        } else {
            Modifier::Control
        };
        Accelerator::new(
            self.modifiers.iter().map(|&m| {
                if m == Modifier::CommandOrControl {
                    concrete
                } else {
                    m
                }
            }),
            self.key,
        )
    }

    /// Same binding once `CommandOrControl` is resolved for `platform`
    pub fn matches(&self, other: &Accelerator, platform: Platform) -> bool {
        self.resolve(platform) == other.resolve(platform)
    }
}

/// Parse `Mod+Mod+Key`
///
/// A trailing `++` means the key itself is `+`.
impl FromStr for Accelerator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Accelerator cannot be empty");
        }

        let (modifier_part, key_name) = if s == "+" {
            ("", "+")
        } else if let Some(rest) = s.strip_suffix("++") {
            (rest, "+")
        } else {
            match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s),
            }
        };

        if key_name.is_empty() {
            bail!("Accelerator '{}' has no key", s);
        }

        let mut modifiers = Vec::new();
        if !modifier_part.is_empty() {
            for name in modifier_part.split('+') {
                let modifier = modifier_from_name(name.trim())
                    .with_context(|| format!("Unknown modifier '{}' in '{}'", name, s))?;
                modifiers.push(modifier);
            }
        }

        let key = key_from_name(key_name.trim())
            .with_context(|| format!("Unknown key '{}' in '{}'", key_name, s))?;

        Ok(Accelerator::new(modifiers, key))
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.canonical())?;
        }
        f.write_str(&self.key.canonical())
    }
}

impl Serialize for Accelerator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
