//! Artwork catalog: metadata source, validation, and sorted image collections.
//!
//! DESIGN
//! ======
//! Artwork files follow a fixed naming convention (`artwork/<i>.jpg` and
//! `artwork/<i>_t.jpg`) and their metadata comes from a JSON mapping keyed by
//! `<i>.jpg`. The catalog resolves every index up front and fails on the first
//! gap, so a page never renders a placard for missing metadata.
//!
//! Desktop and mobile galleries are projections of one sorted `Catalog`
//! through a [`Presentation`]; they cannot drift apart in length or order.

pub mod collection;
pub mod metadata;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use serde::Deserialize;

pub use collection::{Presentation, ThumbnailPosition, build_collection};
pub use metadata::{MetadataSource, parse_metadata};

/// Number of artworks shipped with the site.
pub const ARTWORK_COUNT: usize = 24;

/// Metadata JSON compiled into the crate.
const BUNDLED_METADATA: &str = include_str!("../../data/artwork.json");

// =============================================================================
// TYPES
// =============================================================================

/// Descriptive record for one artwork, as stored in `artwork.json`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub title: String,
    #[serde(default)]
    pub story: String,
    pub artist: String,
    pub medium: String,
    #[serde(default)]
    pub size: String,
    pub year: String,
    pub opensea_url: String,
}

/// Image paths, display heights, and metadata for one gallery slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub original: String,
    pub original_height: u32,
    pub thumbnail: String,
    pub thumbnail_height: u32,
    pub metadata: ImageMetadata,
}

/// One resolved artwork: its file index and validated metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub index: usize,
    pub year: u16,
    pub metadata: ImageMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("artwork metadata is not valid JSON: {0}")]
    Parse(String),
    #[error("artwork metadata missing for {key}")]
    MissingMetadata { key: String },
    #[error("artwork {key} has year {year:?}; expected four digits")]
    InvalidYear { key: String, year: String },
}

// =============================================================================
// NAMING CONVENTION
// =============================================================================

/// Metadata lookup key for artwork `index`.
pub fn image_key(index: usize) -> String {
    format!("{index}.jpg")
}

/// Full-size image path for artwork `index`.
pub fn original_path(index: usize) -> String {
    format!("artwork/{index}.jpg")
}

/// Thumbnail path for artwork `index`.
pub fn thumbnail_path(index: usize) -> String {
    format!("artwork/{index}_t.jpg")
}

// =============================================================================
// CATALOG
// =============================================================================

/// Validated artworks for indices `[0, count)`, ascending by year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Resolve every index in `[0, count)` against `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingMetadata`] for the first index without a
    /// metadata entry, or [`CatalogError::InvalidYear`] when a year is not a
    /// four-digit number.
    pub fn from_source(source: &MetadataSource, count: usize) -> Result<Self, CatalogError> {
        let mut artworks = (0..count)
            .map(|index| -> Result<Artwork, CatalogError> {
                let key = image_key(index);
                let Some(record) = source.get(&key) else {
                    return Err(CatalogError::MissingMetadata { key });
                };
                let year = metadata::parse_year(&key, &record.year)?;
                Ok(Artwork { index, year, metadata: record.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: artworks from the same year keep their file order.
        artworks.sort_by_key(|artwork| artwork.year);
        Ok(Self { artworks })
    }

    /// Catalog built from the metadata compiled into the crate.
    ///
    /// # Errors
    ///
    /// Propagates parse and validation failures from the bundled JSON.
    pub fn bundled() -> Result<Self, CatalogError> {
        let source = parse_metadata(BUNDLED_METADATA)?;
        Self::from_source(&source, ARTWORK_COUNT)
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Project the sorted artworks through `presentation`.
    pub fn descriptors(&self, presentation: Presentation) -> Vec<ImageDescriptor> {
        self.artworks
            .iter()
            .map(|artwork| presentation.describe(artwork))
            .collect()
    }
}
