#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn set_body_background_is_noop_without_browser() {
    assert_eq!(set_body_background("black"), None);
}

#[test]
fn restore_body_background_is_callable() {
    restore_body_background(None);
    restore_body_background(Some("white".to_owned()));
}
