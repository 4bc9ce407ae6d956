use super::*;

#[test]
fn parse_metadata_reads_camel_case_records() {
    let raw = r#"{
        "3.jpg": {
            "title": "Dusk",
            "story": "Painted outdoors.",
            "artist": "A. Painter",
            "medium": "Oil on canvas",
            "size": "12 x 16 in",
            "year": "2019",
            "openseaUrl": "https://opensea.io/x"
        }
    }"#;
    let source = parse_metadata(raw).unwrap();
    let record = source.get("3.jpg").unwrap();
    assert_eq!(record.title, "Dusk");
    assert_eq!(record.story, "Painted outdoors.");
    assert_eq!(record.opensea_url, "https://opensea.io/x");
}

#[test]
fn parse_metadata_defaults_story_and_size() {
    let raw = r#"{"0.jpg": {"title": "T", "artist": "A", "medium": "M", "year": "2020", "openseaUrl": "u"}}"#;
    let source = parse_metadata(raw).unwrap();
    let record = source.get("0.jpg").unwrap();
    assert!(record.story.is_empty());
    assert!(record.size.is_empty());
}

#[test]
fn parse_metadata_rejects_record_without_year() {
    let raw = r#"{"0.jpg": {"title": "T", "artist": "A", "medium": "M", "openseaUrl": "u"}}"#;
    assert!(matches!(parse_metadata(raw), Err(CatalogError::Parse(_))));
}

#[test]
fn parse_metadata_rejects_non_object_document() {
    assert!(matches!(parse_metadata("[]"), Err(CatalogError::Parse(_))));
    assert!(matches!(parse_metadata("not json"), Err(CatalogError::Parse(_))));
}

#[test]
fn parse_year_accepts_four_digits() {
    assert_eq!(parse_year("0.jpg", "2019"), Ok(2019));
    assert_eq!(parse_year("0.jpg", "1999"), Ok(1999));
}

#[test]
fn parse_year_rejects_other_shapes() {
    for bad in ["19", "20190", "", "c.1900", "２０１９", "20a9", " 2019", "2019 ", " 1999 "] {
        assert_eq!(
            parse_year("7.jpg", bad),
            Err(CatalogError::InvalidYear { key: "7.jpg".to_owned(), year: bad.to_owned() }),
            "{bad:?} should be rejected"
        );
    }
}
