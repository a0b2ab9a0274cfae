//! Data types describing the reports index.
//!
//! These types are designed to be:
//!
//! - **Serializable** - the descriptor list arrives as JSON from whatever
//!   pipeline produces the benchmark reports
//! - **Clone-friendly** - components take owned data
//! - **Validated once** - a [`Catalog`] can only be built from descriptors
//!   whose hrefs are non-empty, so rendering never has to check again
//!
//! # Example
//!
//! ```rust
//! use reports_page::types::{Catalog, ReportDescriptor};
//!
//! let catalog = Catalog::new(vec![ReportDescriptor {
//!     label: "Render benchmark".into(),
//!     href: "/reports/render".into(),
//!     description: "Mount and update timings".into(),
//! }])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportsError, Result};
use crate::link::VersionedHref;

/// One entry of the reports index.
///
/// `description` doubles as the alt text of both card illustrations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDescriptor {
    /// Display name shown as the card heading
    pub label: String,
    /// Unversioned link target
    pub href: String,
    /// Body text and image alt text
    #[serde(default)]
    pub description: String,
}

/// Display theme the page is first painted with.
///
/// Both card illustrations are always rendered; the theme only decides the
/// class put on the document root, and CSS does the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light illustrations visible
    Light,
    /// Dark illustrations visible
    Dark,
    /// Follow `prefers-color-scheme`
    #[default]
    System,
}

impl Theme {
    /// Class applied to `<html>`; `None` leaves the choice to the media query.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light"),
            Theme::Dark => Some("dark"),
            Theme::System => None,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" | "auto" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme '{}' (expected light, dark or system)",
                other
            )),
        }
    }
}

/// Ordered, validated list of report descriptors.
///
/// Order is display order, and each descriptor's position is the index used
/// to locate its illustrations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    reports: Vec<ReportDescriptor>,
}

impl Catalog {
    /// Build a catalog, rejecting any descriptor with an empty href.
    pub fn new(reports: Vec<ReportDescriptor>) -> Result<Self> {
        for (index, report) in reports.iter().enumerate() {
            VersionedHref::new(report.href.as_str())
                .map_err(|_| ReportsError::EmptyHref { index })?;
        }
        Ok(Self { reports })
    }

    /// Parse a catalog from JSON text.
    ///
    /// Accepts a bare array or `{ "reports": [...] }`. Shape errors name the
    /// offending entry and field.
    pub fn from_json(json: &str) -> std::result::Result<Self, CatalogParseError> {
        let document: Value = serde_json::from_str(json).map_err(CatalogParseError::Json)?;
        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("reports") {
                Some(Value::Array(entries)) => entries,
                Some(_) => return Err(shape_error("`reports` must be an array")),
                None => return Err(shape_error("expected an array or a `reports` field")),
            },
            _ => return Err(shape_error("expected an array or a `reports` field")),
        };

        let reports = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<ReportDescriptor>(entry)
                    .map_err(|e| shape_error(format!("report at index {}: {}", index, e)))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::new(reports).map_err(CatalogParseError::Invalid)
    }

    /// The validated link of the descriptor at `index`.
    pub(crate) fn link(&self, index: usize) -> VersionedHref {
        VersionedHref::validated(self.reports[index].href.clone())
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content).map_err(|err| match err {
            CatalogParseError::Json(source) => ReportsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            CatalogParseError::Invalid(inner) => inner,
        })?;
        tracing::debug!(
            path = %path.display(),
            reports = catalog.len(),
            "loaded report catalog"
        );
        Ok(catalog)
    }

    /// Descriptors in display order.
    pub fn reports(&self) -> &[ReportDescriptor] {
        &self.reports
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterate descriptors in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportDescriptor> {
        self.reports.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ReportDescriptor;
    type IntoIter = std::slice::Iter<'a, ReportDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

/// Failure while parsing catalog text that has no file path attached yet.
#[derive(Debug, thiserror::Error)]
pub enum CatalogParseError {
    /// The text is not a valid catalog document
    #[error("malformed catalog JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// The document parsed but a descriptor broke the catalog contract
    #[error(transparent)]
    Invalid(ReportsError),
}

fn shape_error(msg: impl fmt::Display) -> CatalogParseError {
    CatalogParseError::Json(serde_json::Error::custom(msg))
}
