//! Presentation parameters and the desktop/mobile collection builder.

use super::{
    Artwork, Catalog, CatalogError, ImageDescriptor, MetadataSource, original_path, thumbnail_path,
};

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

/// Where the thumbnail strip sits relative to the main image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThumbnailPosition {
    Top,
    #[default]
    Bottom,
}

/// Per-viewport gallery parameters. Everything else about a collection is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub original_height: u32,
    pub thumbnail_height: u32,
    pub show_thumbnails: bool,
    pub thumbnail_position: ThumbnailPosition,
}

impl Presentation {
    pub const DESKTOP: Self = Self {
        original_height: 475,
        thumbnail_height: 60,
        show_thumbnails: true,
        thumbnail_position: ThumbnailPosition::Top,
    };

    pub const MOBILE: Self = Self {
        original_height: 400,
        thumbnail_height: 60,
        show_thumbnails: false,
        thumbnail_position: ThumbnailPosition::Bottom,
    };

    /// Descriptor for `artwork` at this presentation's sizes.
    pub fn describe(&self, artwork: &Artwork) -> ImageDescriptor {
        ImageDescriptor {
            original: original_path(artwork.index),
            original_height: self.original_height,
            thumbnail: thumbnail_path(artwork.index),
            thumbnail_height: self.thumbnail_height,
            metadata: artwork.metadata.clone(),
        }
    }
}

/// Load, validate, sort, and project `[0, count)` in one step.
///
/// # Errors
///
/// See [`Catalog::from_source`].
pub fn build_collection(
    source: &MetadataSource,
    count: usize,
    presentation: Presentation,
) -> Result<Vec<ImageDescriptor>, CatalogError> {
    Ok(Catalog::from_source(source, count)?.descriptors(presentation))
}
