//! Render inputs that live outside the descriptor list.
//!
//! The active version and theme belong to whoever hosts the page (router,
//! theme switcher). They are passed in explicitly so rendering stays a pure
//! function of its arguments.

use serde::Serialize;

use crate::assets::AssetLocator;
use crate::config::{DEFAULT_TITLE, PageConfig};
use crate::link::{LinkStrategy, VersionedHref, active_version};
use crate::types::{Catalog, ReportDescriptor, Theme};

/// Everything a render pass reads besides the catalog.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Page heading and `<title>`
    pub title: String,
    /// Active documentation version, if any
    pub version: Option<String>,
    /// Theme the document is first painted with
    pub theme: Theme,
    /// How `version` is merged into card links
    pub links: LinkStrategy,
    /// Where the card illustrations live
    pub assets: AssetLocator,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: None,
            theme: Theme::default(),
            links: LinkStrategy::default(),
            assets: AssetLocator::default(),
        }
    }
}

impl RenderContext {
    /// Context derived from a config file, without a version.
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: None,
            theme: config.theme,
            links: config.link_strategy(),
            assets: config.asset_locator(),
        }
    }

    /// Set the active version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the link strategy.
    pub fn with_links(mut self, links: LinkStrategy) -> Self {
        self.links = links;
        self
    }

    /// Set the asset locator.
    pub fn with_assets(mut self, assets: AssetLocator) -> Self {
        self.assets = assets;
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The version, with blank treated as absent.
    pub fn active_version(&self) -> Option<&str> {
        active_version(self.version.as_deref())
    }

    /// Project every descriptor into the values its card shows.
    ///
    /// This is the single source of card values: the grid renders exactly
    /// these, and `reports-gen list` prints them.
    pub fn cards(&self, catalog: &Catalog) -> Vec<RenderedCard> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, report)| {
                RenderedCard::project(index, report, catalog.link(index), self)
            })
            .collect()
    }
}

/// The externally observable values of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    /// Position in the catalog
    pub index: usize,
    /// Card heading
    pub label: String,
    /// Unversioned link target
    #[serde(rename = "base_href")]
    pub link: VersionedHref,
    /// Resolved link target
    pub href: String,
    /// Light illustration URL
    pub light_src: String,
    /// Dark illustration URL
    pub dark_src: String,
    /// Body text, also the alt text of both illustrations
    pub description: String,
}

impl RenderedCard {
    fn project(
        index: usize,
        report: &ReportDescriptor,
        link: VersionedHref,
        context: &RenderContext,
    ) -> Self {
        let (light_src, dark_src) = context.assets.pair(index);
        Self {
            index,
            label: report.label.clone(),
            href: link.resolve(context.active_version(), &context.links),
            link,
            light_src,
            dark_src,
            description: report.description.clone(),
        }
    }
}
