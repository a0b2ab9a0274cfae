//! Configuration file support for the reports page.
//!
//! Loads an optional `reports.toml`. Every field has a default, so an absent
//! file renders the same page as an empty one.
//!
//! ```toml
//! title = "Benchmark Reports"
//! asset_base = "/"
//! theme = "system"
//! versions = ["v5", "v6"]
//!
//! [link]
//! strategy = "query"
//! param = "version"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::assets::{AssetLocator, DEFAULT_ASSET_BASE};
use crate::link::{DEFAULT_VERSION_PARAM, LinkStrategy};
use crate::types::Theme;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "reports.toml";

/// Default page heading.
pub const DEFAULT_TITLE: &str = "Benchmark Reports";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Page heading and `<title>`
    pub title: String,
    /// Static root serving `graph-{i}.svg` / `graph-{i}-dark.svg`
    pub asset_base: String,
    /// Theme the page is first painted with
    pub theme: Theme,
    /// Versions to render one page each for
    pub versions: Vec<String>,
    /// How versions are merged into card links
    pub link: LinkConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            theme: Theme::default(),
            versions: Vec::new(),
            link: LinkConfig::default(),
        }
    }
}

/// Link rewriting configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinkConfig {
    /// `query` or `path`
    pub strategy: LinkEncoding,
    /// Query parameter name (ignored by `path`)
    pub param: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            strategy: LinkEncoding::default(),
            param: DEFAULT_VERSION_PARAM.to_string(),
        }
    }
}

/// Built-in version encodings selectable from config.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkEncoding {
    /// `/foo?version=v1`
    #[default]
    Query,
    /// `/v1/foo`
    Path,
}

impl std::str::FromStr for LinkEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(LinkEncoding::Query),
            "path" => Ok(LinkEncoding::Path),
            other => Err(format!(
                "unknown link strategy '{}' (expected query or path)",
                other
            )),
        }
    }
}

impl PageConfig {
    /// Load config from `reports.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Strategy described by the `[link]` table.
    ///
    /// A blank `param` is ignored in favour of [`DEFAULT_VERSION_PARAM`].
    pub fn link_strategy(&self) -> LinkStrategy {
        match self.link.strategy {
            LinkEncoding::Query => {
                if self.link.param.trim().is_empty() {
                    tracing::warn!(
                        "[link] param is blank, using '{}'",
                        DEFAULT_VERSION_PARAM
                    );
                }
                LinkStrategy::query(self.link.param.clone())
            }
            LinkEncoding::Path => LinkStrategy::path_prefix(),
        }
    }

    /// Locator rooted at `asset_base`.
    pub fn asset_locator(&self) -> AssetLocator {
        AssetLocator::new(self.asset_base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.asset_base, "/");
        assert_eq!(config.theme, Theme::System);
        assert!(config.versions.is_empty());
        assert_eq!(config.link.strategy, LinkEncoding::Query);
        assert_eq!(config.link.param, "version");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = PageConfig::load(temp.path());
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create");
        writeln!(
            file,
            r#"
title = "Perf"
asset_base = "/static/graphs/"
theme = "dark"
versions = ["v5", "v6"]

[link]
strategy = "path"
"#
        )
        .expect("write config");

        let config = PageConfig::load(temp.path());
        assert_eq!(config.title, "Perf");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.versions, vec!["v5".to_string(), "v6".to_string()]);
        assert_eq!(config.link.strategy, LinkEncoding::Path);
        assert_eq!(config.link.param, "version");
        assert_eq!(config.asset_locator().light(3), "/static/graphs/graph-3.svg");
        assert_eq!(config.link_strategy().resolve("/foo", Some("v6")), "/v6/foo");
    }

    #[test]
    fn test_custom_query_param() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "[link]\nstrategy = \"query\"\nparam = \"v\"\n",
        )
        .expect("write");

        let config = PageConfig::load(temp.path());
        assert_eq!(config.link_strategy().resolve("/foo", Some("2")), "/foo?v=2");
    }

    #[test]
    fn test_blank_query_param_uses_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[link]\nparam = \"\"\n").expect("write");

        let config = PageConfig::load(temp.path());
        assert_eq!(config.link.param, "");
        assert_eq!(
            config.link_strategy().resolve("/foo", Some("v1")),
            "/foo?version=v1"
        );
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "").expect("write");
        assert_eq!(PageConfig::load(temp.path()), PageConfig::default());
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "theme = \"sepia\"").expect("write");
        assert_eq!(PageConfig::load(temp.path()), PageConfig::default());
    }

    #[test]
    fn link_encoding_from_str() {
        assert_eq!("PATH".parse::<LinkEncoding>(), Ok(LinkEncoding::Path));
        assert!("segment".parse::<LinkEncoding>().is_err());
    }
}
