//! Platform flag and OS facts
//!
//! The menu layer only cares about one distinction: the primary desktop
//! platform (macOS, with its separate application menu) versus everything
//! else. Names follow the `darwin`/`win32`/`linux` convention used by the
//! issue reporter.

use std::process::Command;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[strum(serialize = "darwin", serialize = "macos")]
    Darwin,
    #[strum(serialize = "win32", serialize = "windows")]
    Win32,
    #[strum(serialize = "linux")]
    Linux,
    #[strum(serialize = "freebsd")]
    FreeBsd,
    #[strum(serialize = "openbsd")]
    OpenBsd,
    #[strum(serialize = "other")]
    Other,
}

impl Platform {
    /// Platform of the running process
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust `target_os` name onto a platform flag
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::Darwin,
            "windows" => Platform::Win32,
            "linux" => Platform::Linux,
            "freebsd" => Platform::FreeBsd,
            "openbsd" => Platform::OpenBsd,
            _ => Platform::Other,
        }
    }

    /// True for the platform with a dedicated application menu
    pub fn is_primary(self) -> bool {
        self == Platform::Darwin
    }

    /// Minimized windows must be restored before they take input focus
    pub fn restores_before_focus(self) -> bool {
        self.is_primary()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
            Platform::OpenBsd => "openbsd",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architecture name in the `x64`/`arm64` style
pub fn arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        other => other,
    }
}

/// OS facts reported in issue bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub platform: Platform,
    pub arch: String,
    pub release: String,
}

impl SystemInfo {
    /// Collect arch and kernel release for the given platform flag
    pub fn detect(platform: Platform) -> Self {
        Self {
            platform,
            arch: arch_name(std::env::consts::ARCH).to_string(),
            release: os_release(),
        }
    }
}

/// Kernel release string (`uname -r`, or `ver` on Windows)
fn os_release() -> String {
    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", "ver"]).output()
    } else {
        Command::new("uname").arg("-r").output()
    };

    match output {
        Ok(out) if out.status.success() => {
            let release = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if release.is_empty() {
                "unknown".to_string()
            } else {
                release
            }
        }
        Ok(out) => {
            log::debug!("OS release lookup exited with {}", out.status);
            "unknown".to_string()
        }
        Err(e) => {
            log::debug!("OS release lookup failed: {}", e);
            "unknown".to_string()
        }
    }
}
