//! URL launcher seam
//!
//! Single-record lookups hand the course URL to a `UrlLauncher`. The launch
//! is an advisory side effect: it never decides whether the data was found.

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
#[error("failed to open {url}: {reason}")]
pub struct LaunchError {
    pub url: String,
    pub reason: String,
}

/// Opens a URL somewhere outside the process.
pub trait UrlLauncher: Send + Sync {
    fn launch(&self, url: &str) -> Result<(), LaunchError>;

    /// Whether `launch` does anything at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Opens URLs in the desktop's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlLauncher for SystemBrowser {
    fn launch(&self, url: &str) -> Result<(), LaunchError> {
        open::that(url).map_err(|e| LaunchError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Launcher used when browser opening is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLauncher;

impl UrlLauncher for DisabledLauncher {
    fn launch(&self, _url: &str) -> Result<(), LaunchError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Outcome of the side effect, reported next to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    Opened,
    Failed,
    Disabled,
    /// The row has no usable URL value.
    NoUrl,
}

impl LaunchOutcome {
    pub fn web_page_title(self) -> &'static str {
        match self {
            LaunchOutcome::Opened => "Opened in Browser",
            LaunchOutcome::Failed => "Failed to open course URL",
            LaunchOutcome::Disabled => "Browser launch disabled",
            LaunchOutcome::NoUrl => "No course URL available",
        }
    }
}
