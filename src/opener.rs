use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Hands a path to whatever application the OS associates with it.
pub trait Opener {
    /// Succeeds once the launcher process has started; the opened
    /// application's own outcome is never observed.
    fn open(&self, path: &Path) -> Result<()>;
}

/// OS family that decides which launcher is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the BSDs, anything with a freedesktop `xdg-open`.
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Posix,
        }
    }

    pub fn launch_command(self, path: &Path) -> Command {
        let mut command = match self {
            Platform::Windows => {
                // `start` treats its first quoted argument as a window title.
                let mut command = Command::new("cmd");
                command.args(["/c", "start", ""]);
                command
            }
            Platform::MacOs => Command::new("open"),
            Platform::Posix => Command::new("xdg-open"),
        };
        command.arg(path);
        command
    }
}

/// Launches paths through the platform's native opener without waiting on it.
#[derive(Debug, Clone, Copy)]
pub struct SystemOpener {
    platform: Platform,
}

impl SystemOpener {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let mut command = self.platform.launch_command(path);
        let program = command.get_program().to_string_lossy().into_owned();

        debug!(program = %program, path = %path.display(), "launching");
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch `{}` for {}", program, path.display()))?;

        Ok(())
    }
}
