//! # Site configuration — `portfolio.toml`
//!
//! Describes where the page finds its content and how the name heading is
//! animated. The file is optional: every key has a default, so a missing or
//! empty file is equivalent to [`PortfolioConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [resources]
//! root = ""                     # site root, relative to the page URL or working dir
//! profile = "data.json"
//! education = "education.json"
//! projects = "projects.json"
//! markdown_dir = "projects"     # project detail files live here
//!
//! [reveal]
//! frames = 20
//! interval_ms = 120
//! symbols = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortfolioConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ResourceConfig`] | Paths of the three JSON documents and the markdown directory. |
//! | [`RevealConfig`] | Frame count, tick interval and symbol set of the name animation. |

use serde::{Deserialize, Serialize};

/// Symbols shown in place of not-yet-revealed name characters.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Locations of the site's content files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory (or URL prefix) all other paths are relative to.
    /// Empty string means next to the page itself.
    pub root: String,
    pub profile: String,
    pub education: String,
    pub projects: String,
    /// Directory holding the per-project markdown files.
    pub markdown_dir: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            profile: "data.json".to_string(),
            education: "education.json".to_string(),
            projects: "projects.json".to_string(),
            markdown_dir: "projects".to_string(),
        }
    }
}

impl ResourceConfig {
    /// Path of a project's markdown file: `"<markdown_dir>/<file>"`.
    pub fn markdown_path(&self, file: &str) -> String {
        let dir = self.markdown_dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}/{file}")
        }
    }
}

/// Name animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Number of timer ticks before the name is forced to its final text.
    pub frames: u32,
    /// Milliseconds between ticks.
    pub interval_ms: u32,
    pub symbols: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            frames: 20,
            interval_ms: 120,
            symbols: DEFAULT_SYMBOLS.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse `s`, logging and falling back to the defaults when it is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = PortfolioConfig::from_toml("").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.resources.profile, "data.json");
        assert_eq!(config.reveal.frames, 20);
        assert_eq!(config.reveal.interval_ms, 120);
        assert_eq!(config.reveal.symbols, DEFAULT_SYMBOLS);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = PortfolioConfig::from_toml(
            "[resources]\nroot = \"site\"\n\n[reveal]\nframes = 8\n",
        )
        .unwrap();
        assert_eq!(config.resources.root, "site");
        assert_eq!(config.resources.education, "education.json");
        assert_eq!(config.reveal.frames, 8);
        assert_eq!(config.reveal.interval_ms, 120);
    }

    #[test]
    fn invalid_file_falls_back_to_default() {
        let config = PortfolioConfig::from_toml_or_default("[reveal]\nframes = \"many\"");
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn markdown_path_joins_directory() {
        let resources = ResourceConfig::default();
        assert_eq!(resources.markdown_path("tool.md"), "projects/tool.md");

        let flat = ResourceConfig {
            markdown_dir: String::new(),
            ..ResourceConfig::default()
        };
        assert_eq!(flat.markdown_path("tool.md"), "tool.md");

        let trailing = ResourceConfig {
            markdown_dir: "docs/".to_string(),
            ..ResourceConfig::default()
        };
        assert_eq!(trailing.markdown_path("a.md"), "docs/a.md");
    }
}
