//! Render configuration: artifact paths and the viewer command.

use std::path::PathBuf;

/// Where the plain-text map is cached, relative to the working directory.
pub const DEFAULT_MAP_PATH: &str = "journey_map.txt";
/// Where the HTML fallback is written, relative to the working directory.
pub const DEFAULT_HTML_PATH: &str = "journey_route.html";
/// Name of the route viewer binary.
pub const DEFAULT_VIEWER: &str = "westbound-route";

/// Environment variable overriding the viewer command.
pub const VIEWER_ENV: &str = "WESTBOUND_VIEWER";
/// Environment variable that, when set, keeps the HTML fallback from being
/// opened in the default handler.
pub const NO_OPEN_ENV: &str = "WESTBOUND_NO_OPEN";

/// Configuration for [`crate::RouteVisualizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Path of the cached plain-text map.
    pub map_path: PathBuf,
    /// Path of the HTML fallback document.
    pub html_path: PathBuf,
    /// Command that opens the route window.
    pub viewer: String,
    /// Whether to open the HTML fallback with the default handler.
    pub open_fallback: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            viewer: DEFAULT_VIEWER.to_string(),
            open_fallback: true,
        }
    }
}

impl RenderConfig {
    /// Create a render config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `WESTBOUND_VIEWER` and `WESTBOUND_NO_OPEN`.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(viewer) = lookup(VIEWER_ENV).filter(|v| !v.trim().is_empty()) {
            self.viewer = viewer;
        }
        if let Some(value) = lookup(NO_OPEN_ENV) {
            let value = value.trim().to_lowercase();
            if !matches!(value.as_str(), "" | "0" | "false" | "no") {
                self.open_fallback = false;
            }
        }
        self
    }

    /// Set the map path.
    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Set the HTML fallback path.
    pub fn with_html_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_path = path.into();
        self
    }

    /// Set the viewer command.
    pub fn with_viewer(mut self, viewer: impl Into<String>) -> Self {
        self.viewer = viewer.into();
        self
    }

    /// Set whether the HTML fallback is opened.
    pub fn with_open_fallback(mut self, open: bool) -> Self {
        self.open_fallback = open;
        self
    }
}
