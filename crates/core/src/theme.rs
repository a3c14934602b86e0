//! Theme configuration.
//!
//! All colors, spacing and stroke sizes used by the screens live in a
//! [`Theme`] that is passed into rendering calls. A theme file is JSON with
//! every field optional; missing fields keep their built-in values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{CoreError, CoreResult};
use crate::line_state::{LineState, LineStyle};

/// Environment variable naming a theme file.
pub const THEME_PATH_ENV: &str = "PMT_THEME";

/// Theme file location relative to the user's config directory.
const DEFAULT_THEME_FILE: &str = "projectmgt/theme.json";

/// Connector strokes for each line state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorStyles {
    pub undefined: LineStyle,
    pub connected: LineStyle,
    pub disconnected: LineStyle,
}

impl Default for ConnectorStyles {
    fn default() -> Self {
        Self {
            undefined: LineState::Undefined.default_style(),
            connected: LineState::Connected.default_style(),
            disconnected: LineState::Disconnected.default_style(),
        }
    }
}

/// Progress ring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    pub stroke_width: f32,
    /// Side of the square the ring is drawn in.
    pub size: f32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 8.0,
            size: 48.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Width of the time-code gutter, in cells.
    pub gutter_width: u16,
    /// Cells between the connector line and the task card.
    pub connector_gap: u16,
    pub connectors: ConnectorStyles,
    pub ring: RingStyle,
    /// Timeline panel background.
    pub background: Color,
    /// Task card background.
    pub card: Color,
    pub text: Color,
    /// Secondary text such as counts and captions.
    pub muted_text: Color,
    /// Creation form background.
    pub form_background: Color,
    /// Selected chips, gauges and the create button.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gutter_width: 10,
            connector_gap: 2,
            connectors: ConnectorStyles::default(),
            ring: RingStyle::default(),
            background: Color::from_argb(0xFFF1_F5FE),
            card: Color::WHITE,
            text: Color::from_argb(0xFF33_354E),
            muted_text: Color::GRAY,
            form_background: Color::from_argb(0xFF33_354E),
            accent: Color::from_argb(0xFF2C_C09C),
        }
    }
}

impl Theme {
    /// Load a theme file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ThemeRead` if the file cannot be read.
    /// Returns `CoreError::ThemeParse` if it is not a valid theme.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::ThemeRead {
            path: path.to_path_buf(),
            source,
        })?;

        let theme = serde_json::from_str(&contents).map_err(|source| CoreError::ThemeParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// Default theme file path in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULT_THEME_FILE))
    }

    /// Resolve and load the theme.
    ///
    /// Uses the file from [`resolve_theme_path`] when there is one and the
    /// built-in theme otherwise.
    pub fn resolve(cli_path: Option<PathBuf>) -> CoreResult<Self> {
        match resolve_theme_path(cli_path) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no theme file, using built-in theme");
                Ok(Self::default())
            }
        }
    }
}

/// Find the theme file to load.
///
/// Priority:
/// 1. Command line `--theme` argument
/// 2. `PMT_THEME` environment variable (if non-empty)
/// 3. `<config dir>/projectmgt/theme.json`, only if it exists
pub fn resolve_theme_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(THEME_PATH_ENV)
        && !env_path.is_empty()
    {
        return Some(PathBuf::from(env_path));
    }

    Theme::default_path().filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_state::StrokePattern;
    use serial_test::serial;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pmt-theme-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_theme_values() {
        let theme = Theme::default();
        assert_eq!(theme.gutter_width, 10);
        assert_eq!(theme.ring.stroke_width, 8.0);
        assert_eq!(theme.accent, Color::from_argb(0xFF2C_C09C));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let theme: Theme = serde_json::from_str(r#"{ "gutter_width": 14 }"#).unwrap();
        assert_eq!(theme.gutter_width, 14);
        assert_eq!(theme.connectors, ConnectorStyles::default());
        assert_eq!(theme.ring, RingStyle::default());
    }

    #[test]
    fn test_json_connector_override() {
        let json = r##"{
            "connectors": {
                "connected": { "color": "#00FF00", "width": 4.0, "pattern": { "kind": "solid" } },
                "undefined": { "color": "#888888", "width": 1.0, "pattern": { "kind": "dashed", "on": 4.0, "off": 4.0 } }
            }
        }"##;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.connectors.connected.color, Color::from_argb(0xFF00_FF00));
        assert_eq!(
            theme.connectors.undefined.pattern,
            StrokePattern::Dashed { on: 4.0, off: 4.0 }
        );
        assert_eq!(
            theme.connectors.disconnected,
            LineState::Disconnected.default_style()
        );
    }

    #[test]
    fn test_json_bad_color_fails() {
        let result: Result<Theme, _> = serde_json::from_str(r#"{ "accent": "green" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_round_trips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("load.json", r#"{ "connector_gap": 3 }"#);
        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.connector_gap, 3);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let result = Theme::load(Path::new("/nonexistent/pmt/theme.json"));
        assert!(matches!(result, Err(CoreError::ThemeRead { .. })));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let path = temp_file("invalid.json", "{ not json");
        let result = Theme::load(&path);
        assert!(matches!(result, Err(CoreError::ThemeParse { .. })));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    #[serial]
    fn test_resolve_theme_path_cli_wins() {
        // SAFETY: serialized with the other env tests.
        unsafe { std::env::set_var(THEME_PATH_ENV, "/from/env.json") };
        let path = resolve_theme_path(Some(PathBuf::from("/from/cli.json")));
        unsafe { std::env::remove_var(THEME_PATH_ENV) };
        assert_eq!(path, Some(PathBuf::from("/from/cli.json")));
    }

    #[test]
    #[serial]
    fn test_resolve_theme_path_env() {
        unsafe { std::env::set_var(THEME_PATH_ENV, "/from/env.json") };
        let path = resolve_theme_path(None);
        unsafe { std::env::remove_var(THEME_PATH_ENV) };
        assert_eq!(path, Some(PathBuf::from("/from/env.json")));
    }

    #[test]
    #[serial]
    fn test_resolve_theme_path_empty_env_is_ignored() {
        unsafe { std::env::set_var(THEME_PATH_ENV, "") };
        let path = resolve_theme_path(None);
        unsafe { std::env::remove_var(THEME_PATH_ENV) };
        assert_ne!(path, Some(PathBuf::from("")));
    }

    #[test]
    #[serial]
    fn test_resolve_explicit_missing_file_errors() {
        unsafe { std::env::remove_var(THEME_PATH_ENV) };
        let result = Theme::resolve(Some(PathBuf::from("/nonexistent/pmt/theme.json")));
        assert!(result.is_err());
    }
}
