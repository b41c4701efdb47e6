//! Tests for `Link` header parsing

use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue, LINK};

use super::*;
use crate::error::Error;

#[test]
fn test_parse_two_relations() {
    let header = "<https://api.cesium.com/v1/assets?page=3>; rel=\"next\", \
                  <https://api.cesium.com/v1/assets?page=1>; rel=\"prev\"";
    let links = PaginationLinks::from_header(header).unwrap();

    assert_eq!(
        links.next.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=3")
    );
    assert_eq!(
        links.prev.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=1")
    );
}

#[test]
fn test_parse_two_relations_reversed_order() {
    let header = "<https://api.cesium.com/v1/assets?page=1>; rel=\"prev\", \
                  <https://api.cesium.com/v1/assets?page=3>; rel=\"next\"";
    let links = PaginationLinks::from_header(header).unwrap();

    assert_eq!(
        links.next.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=3")
    );
    assert_eq!(
        links.prev.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=1")
    );
}

#[test]
fn test_parse_single_next() {
    let header = "<https://api.cesium.com/v1/assets?page=2>; rel=\"next\"";
    let links = PaginationLinks::from_header(header).unwrap();

    assert_eq!(
        links.next.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=2")
    );
    assert_eq!(links.prev, None);
}

#[test]
fn test_parse_single_prev() {
    let header = "<https://api.cesium.com/v1/assets?page=1>; rel=\"prev\"";
    let links = PaginationLinks::from_header(header).unwrap();

    assert_eq!(links.next, None);
    assert_eq!(
        links.prev.as_deref(),
        Some("https://api.cesium.com/v1/assets?page=1")
    );
}

#[test]
fn test_parse_too_short_is_error() {
    let result = PaginationLinks::from_header("https://api.cesium.com/v1/assets");
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn test_parse_empty_is_error() {
    let result = PaginationLinks::from_header("");
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn test_parse_missing_brackets_is_error() {
    let result =
        PaginationLinks::from_header("https://api.cesium.com/v1/assets?page=2; rel=\"next\"");
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn test_parse_unknown_relation_is_error() {
    let header = "<https://api.cesium.com/v1/assets?page=1>; rel=\"first\"";
    let result = PaginationLinks::from_header(header);

    let err = result.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert!(err.to_string().contains("first"));
}

#[test]
fn test_parse_malformed_second_segment_is_error() {
    let header = "<https://api.cesium.com/v1/assets?page=2>; rel=\"next\", garbage";
    let result = PaginationLinks::from_header(header);
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn test_parse_is_idempotent() {
    let header = "<https://api.cesium.com/v1/assets?page=3>; rel=\"next\", \
                  <https://api.cesium.com/v1/assets?page=1>; rel=\"prev\"";
    let first = PaginationLinks::from_header(header).unwrap();
    let second = PaginationLinks::from_header(header).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_from_headers_absent() {
    let headers = HeaderMap::new();
    assert_eq!(PaginationLinks::from_headers(&headers).unwrap(), None);
}

#[test]
fn test_from_headers_present() {
    let mut headers = HeaderMap::new();
    headers.insert(
        LINK,
        HeaderValue::from_static("<https://api.cesium.com/v2/tokens?page=2>; rel=\"next\""),
    );

    let links = PaginationLinks::from_headers(&headers).unwrap().unwrap();
    assert_eq!(
        links.next.as_deref(),
        Some("https://api.cesium.com/v2/tokens?page=2")
    );
}

#[test]
fn test_from_headers_non_utf8_is_error() {
    let mut headers = HeaderMap::new();
    headers.insert(LINK, HeaderValue::from_bytes(&[0xF0, 0x28]).unwrap());

    let result = PaginationLinks::from_headers(&headers);
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[test]
fn test_from_headers_malformed_is_error() {
    let mut headers = HeaderMap::new();
    headers.insert(LINK, HeaderValue::from_static("not-a-link-header"));

    let result = PaginationLinks::from_headers(&headers);
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}
