use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use tracing::{debug, warn};

/// How rendered charts are shown once saved.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayMode {
    /// Files only.
    Headless,
    /// Always hand charts to the platform opener.
    Open,
    /// Open only when a display is detected.
    Auto
}

impl DisplayMode {
    pub fn shows_charts(self, display_available: bool) -> bool {
        match self {
            DisplayMode::Headless => false,
            DisplayMode::Open => true,
            DisplayMode::Auto => display_available
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "headless" | "none" | "off" => Ok(DisplayMode::Headless),
            "open" | "on" => Ok(DisplayMode::Open),
            "auto" | "" => Ok(DisplayMode::Auto),
            other => Err(format!("Unknown display mode '{other}'"))
        }
    }
}

/// Opens saved charts in the desktop's image viewer without waiting on it.
#[derive(Debug, Clone, Copy)]
pub struct ChartViewer {
    enabled: bool
}

impl ChartViewer {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            enabled: mode.shows_charts(display_available())
        }
    }

    #[cfg(test)]
    pub fn headless() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn show(&self, path: &Path) {
        if !self.enabled {
            return;
        }

        //NOTE: The child is never awaited, a viewer left open must not hold up the pipeline
        match opener_command(path).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null()).spawn() {
            Ok(_) => debug!("Opened {} in the system viewer", path.display()),
            Err(error) => warn!("Could not open {} in a viewer: {error}", path.display())
        }
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn display_available() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn display_available() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}
