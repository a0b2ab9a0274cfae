//! Illustration asset locator.
//!
//! Every card shows one of two SVGs, named after the card's position:
//! `graph-{i}.svg` for the light theme and `graph-{i}-dark.svg` for the dark
//! theme. The files are produced by the report pipeline and served from a
//! single static root.

use std::path::{Path, PathBuf};

/// Default static root the illustrations are served from.
pub const DEFAULT_ASSET_BASE: &str = "/";

/// Light-theme file name for the card at `index`.
pub fn light_file_name(index: usize) -> String {
    format!("graph-{}.svg", index)
}

/// Dark-theme file name for the card at `index`.
pub fn dark_file_name(index: usize) -> String {
    format!("graph-{}-dark.svg", index)
}

/// Resolves illustration URLs under a fixed root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLocator {
    base: String,
}

impl AssetLocator {
    /// Build a locator; trailing slashes on `base` are ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim().trim_end_matches('/').to_string();
        Self { base }
    }

    /// The normalized root (no trailing slash, empty for `/`).
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the light illustration, e.g. `/graph-2.svg`.
    pub fn light(&self, index: usize) -> String {
        format!("{}/{}", self.base, light_file_name(index))
    }

    /// URL of the dark illustration, e.g. `/graph-2-dark.svg`.
    pub fn dark(&self, index: usize) -> String {
        format!("{}/{}", self.base, dark_file_name(index))
    }

    /// Whether the root is an unencrypted `http://` origin.
    pub fn is_plain_http(&self) -> bool {
        self.base
            .get(..7)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http://"))
    }

    /// Both URLs as `(light, dark)`.
    pub fn pair(&self, index: usize) -> (String, String) {
        (self.light(index), self.dark(index))
    }
}

impl Default for AssetLocator {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

/// Files a catalog of `count` cards expects in `dir` that are not there.
///
/// Returned in card order, light before dark.
pub fn missing_assets(dir: &Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .flat_map(|index| [light_file_name(index), dark_file_name(index)])
        .map(|name| dir.join(name))
        .filter(|path| !path.is_file())
        .collect()
}
