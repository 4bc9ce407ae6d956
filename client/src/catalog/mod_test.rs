use super::*;

fn meta(title: &str, year: &str) -> ImageMetadata {
    ImageMetadata {
        title: title.to_owned(),
        story: String::new(),
        artist: "A. Painter".to_owned(),
        medium: "Oil on canvas".to_owned(),
        size: "10 x 10 in".to_owned(),
        year: year.to_owned(),
        opensea_url: format!("https://opensea.io/{title}"),
    }
}

fn source_with_years(years: &[&str]) -> MetadataSource {
    years
        .iter()
        .enumerate()
        .map(|(i, year)| (image_key(i), meta(&format!("t{i}"), year)))
        .collect()
}

// =============================================================
// Naming convention
// =============================================================

#[test]
fn paths_follow_index_convention_for_every_artwork() {
    for i in 0..ARTWORK_COUNT {
        assert_eq!(image_key(i), format!("{i}.jpg"));
        assert_eq!(original_path(i), format!("artwork/{i}.jpg"));
        assert_eq!(thumbnail_path(i), format!("artwork/{i}_t.jpg"));
    }
}

// =============================================================
// Catalog::from_source
// =============================================================

#[test]
fn from_source_sorts_ascending_by_year() {
    let source = source_with_years(&["2019", "2015", "2022", "2017"]);
    let catalog = Catalog::from_source(&source, 4).unwrap();
    let order: Vec<usize> = catalog.artworks().iter().map(|a| a.index).collect();
    assert_eq!(order, vec![1, 3, 0, 2]);
}

#[test]
fn from_source_keeps_file_order_for_equal_years() {
    let source = source_with_years(&["2020", "2018", "2020", "2018", "2020"]);
    let catalog = Catalog::from_source(&source, 5).unwrap();
    let order: Vec<usize> = catalog.artworks().iter().map(|a| a.index).collect();
    assert_eq!(order, vec![1, 3, 0, 2, 4]);
}

#[test]
fn from_source_order_agrees_with_lexical_year_order() {
    let source = source_with_years(&["2003", "1999", "2010", "2001", "1999", "2024"]);
    let catalog = Catalog::from_source(&source, 6).unwrap();
    let artworks = catalog.artworks();
    for i in 0..artworks.len() {
        for j in (i + 1)..artworks.len() {
            assert!(artworks[i].metadata.year <= artworks[j].metadata.year);
            assert!(artworks[i].year <= artworks[j].year);
        }
    }
}

#[test]
fn from_source_fails_fast_naming_missing_key() {
    let mut source = source_with_years(&["2019"; 8]);
    source.remove("5.jpg");
    let err = Catalog::from_source(&source, 8).unwrap_err();
    assert_eq!(err, CatalogError::MissingMetadata { key: "5.jpg".to_owned() });
    assert_eq!(err.to_string(), "artwork metadata missing for 5.jpg");
}

#[test]
fn from_source_rejects_short_year() {
    let source = source_with_years(&["2019", "19"]);
    let err = Catalog::from_source(&source, 2).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidYear { key: "1.jpg".to_owned(), year: "19".to_owned() }
    );
}

#[test]
fn from_source_rejects_padded_year() {
    let source = source_with_years(&["2018", " 2019"]);
    let err = Catalog::from_source(&source, 2).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidYear { key: "1.jpg".to_owned(), year: " 2019".to_owned() }
    );
}

#[test]
fn from_source_ignores_entries_beyond_count() {
    let source = source_with_years(&["2019", "2018", "2017"]);
    let catalog = Catalog::from_source(&source, 2).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.artworks().iter().all(|a| a.index < 2));
}

#[test]
fn from_source_with_zero_count_is_empty() {
    let catalog = Catalog::from_source(&MetadataSource::new(), 0).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.descriptors(Presentation::DESKTOP).is_empty());
}

// =============================================================
// Bundled data
// =============================================================

#[test]
fn bundled_catalog_covers_every_artwork() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.len(), ARTWORK_COUNT);
    let mut indices: Vec<usize> = catalog.artworks().iter().map(|a| a.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..ARTWORK_COUNT).collect::<Vec<_>>());
}

#[test]
fn bundled_catalog_links_to_marketplace() {
    let catalog = Catalog::bundled().unwrap();
    assert!(
        catalog
            .artworks()
            .iter()
            .all(|a| a.metadata.opensea_url.starts_with("https://opensea.io/"))
    );
}

// =============================================================
// Desktop / mobile projections
// =============================================================

#[test]
fn desktop_and_mobile_descriptors_share_order_and_metadata() {
    let catalog = Catalog::bundled().unwrap();
    let desktop = catalog.descriptors(Presentation::DESKTOP);
    let mobile = catalog.descriptors(Presentation::MOBILE);
    assert_eq!(desktop.len(), mobile.len());
    for (d, m) in desktop.iter().zip(&mobile) {
        assert_eq!(d.metadata, m.metadata);
        assert_eq!(d.original, m.original);
        assert_eq!(d.thumbnail, m.thumbnail);
        assert_eq!(d.original_height, 475);
        assert_eq!(m.original_height, 400);
    }
}
