//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/navtree/navtree.toml`
//! 3. Local config: `<project_dir>/.navtree.toml`
//! 4. Environment variables: `NAVTREE_*` prefix (`__` separates nested keys)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, ClientHooks, NavTreeRenderer, PageShell};

/// Raw page shell for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPageShell {
    pub stylesheet: Option<String>,
    pub script: Option<String>,
    pub frame_name: Option<String>,
    pub frame_src: Option<String>,
    pub frame_title: Option<String>,
}

/// Raw client hook names for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawClientHooks {
    pub link_click: Option<String>,
    pub menu_toggle: Option<String>,
    pub frame_loaded: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub escape_html: Option<bool>,
    pub output: Option<PathBuf>,
    pub page: RawPageShell,
    pub hooks: RawClientHooks,
}

/// Unified configuration for navtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Escape titles and attribute values (default: true)
    pub escape_html: bool,
    /// Default output file for `render` when `-o` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Asset locations and content frame setup
    pub page: PageShell,
    /// Client-side handler names wired into the markup
    pub hooks: ClientHooks,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            escape_html: true,
            output: None,
            page: PageShell::default(),
            hooks: ClientHooks::default(),
        }
    }
}

/// Get the XDG config directory for navtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "navtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("navtree.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".navtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn pick(overlay: &Option<String>, base: &str) -> String {
    overlay.clone().unwrap_or_else(|| base.to_string())
}

impl PageShell {
    fn merge(&self, overlay: &RawPageShell) -> Self {
        Self {
            stylesheet: pick(&overlay.stylesheet, &self.stylesheet),
            script: pick(&overlay.script, &self.script),
            frame_name: pick(&overlay.frame_name, &self.frame_name),
            frame_src: pick(&overlay.frame_src, &self.frame_src),
            frame_title: pick(&overlay.frame_title, &self.frame_title),
        }
    }
}

impl ClientHooks {
    fn merge(&self, overlay: &RawClientHooks) -> Self {
        Self {
            link_click: pick(&overlay.link_click, &self.link_click),
            menu_toggle: pick(&overlay.menu_toggle, &self.menu_toggle),
            frame_loaded: pick(&overlay.frame_loaded, &self.frame_loaded),
        }
    }
}

impl Settings {
    /// Build the renderer described by these settings.
    pub fn renderer(&self) -> NavTreeRenderer {
        NavTreeRenderer::new(self.hooks.clone(), self.page.clone()).with_escape(self.escape_html)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(output) = &self.output {
            let expanded = expand_env_vars(output.to_string_lossy().as_ref());
            self.output = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            escape_html: overlay.escape_html.unwrap_or(self.escape_html),
            output: overlay.output.clone().or_else(|| self.output.clone()),
            page: self.page.merge(&overlay.page),
            hooks: self.hooks.merge(&overlay.hooks),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory for local config
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("config: global {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("config: local {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply NAVTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NAVTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("escape_html") {
            settings.escape_html = val;
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = Some(PathBuf::from(val));
        }

        let page = &mut settings.page;
        for (key, field) in [
            ("page.stylesheet", &mut page.stylesheet),
            ("page.script", &mut page.script),
            ("page.frame_name", &mut page.frame_name),
            ("page.frame_src", &mut page.frame_src),
            ("page.frame_title", &mut page.frame_title),
        ] {
            if let Ok(val) = config.get_string(key) {
                *field = val;
            }
        }

        let hooks = &mut settings.hooks;
        for (key, field) in [
            ("hooks.link_click", &mut hooks.link_click),
            ("hooks.menu_toggle", &mut hooks.menu_toggle),
            ("hooks.frame_loaded", &mut hooks.frame_loaded),
        ] {
            if let Ok(val) = config.get_string(key) {
                *field = val;
            }
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# navtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/navtree/navtree.toml
#   Local:  <project_dir>/.navtree.toml
#   Env:    NAVTREE_* environment variables, e.g. NAVTREE_PAGE__FRAME_NAME=content

# Escape titles and attribute values; disable to allow inline markup in titles
# escape_html = true

# Default output file for `navtree render` (supports ~ and $VAR)
# output = "~/site/_includes/topics.html"

[page]
# stylesheet = "/blog/assets/topics.css"
# script = "/blog/assets/topics.js"
# frame_name = "frame"
# frame_src = "../welcome/"
# frame_title = "topic content"

[hooks]
# Client-side functions defined by the site's script
# link_click = "handleLinkClick"
# menu_toggle = "toggleHamburgerMenu"
# frame_loaded = "iframeLoaded"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_matches_page_conventions() {
        let settings = Settings::default();
        assert!(settings.escape_html);
        assert!(settings.output.is_none());
        assert_eq!(settings.page.frame_name, "frame");
        assert_eq!(settings.hooks.link_click, "handleLinkClick");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_overlay_wins_where_specified() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str(
            r#"
escape_html = false

[page]
frame_name = "content"

[hooks]
menu_toggle = "toggleMenu"
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert!(!merged.escape_html);
        assert_eq!(merged.page.frame_name, "content");
        assert_eq!(merged.page.stylesheet, "/blog/assets/topics.css");
        assert_eq!(merged.hooks.menu_toggle, "toggleMenu");
        assert_eq!(merged.hooks.link_click, "handleLinkClick");
    }

    #[test]
    fn given_empty_overlay_when_merging_then_keeps_base() {
        let base = Settings {
            output: Some(PathBuf::from("out.html")),
            ..Settings::default()
        };
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn given_tilde_in_output_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            output: Some(PathBuf::from("~/site/topics.html")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let output = settings.output.unwrap();
        assert!(output.to_string_lossy().starts_with(&home));
    }

    #[test]
    fn given_settings_when_to_toml_then_roundtrips() {
        let settings = Settings::default();
        let toml_str = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.escape_html.is_none());
        assert!(raw.page.frame_name.is_none());
    }

    #[test]
    fn given_settings_without_escaping_when_building_renderer_then_renders_verbatim() {
        let settings = Settings {
            escape_html: false,
            ..Settings::default()
        };
        let html = settings
            .renderer()
            .render_item(&crate::domain::NavEntry::new("<i>x</i>", "/x"));
        assert!(html.contains("<i>x</i>"));
    }
}
