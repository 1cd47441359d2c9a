//! Tests for pagination module

use super::*;
use crate::config::PageConfig;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn config(default_size: u64, max_size: u64) -> PageConfig {
    PageConfig::new(default_size, max_size).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_defaults_without_token_or_size() {
    let page = Page::create(None, None, 1, 100).unwrap();
    assert_eq!(page.token(), "1");
    assert_eq!(page.number(), 1);
    assert_eq!(page.size(), 1);
    assert_eq!(page.offset(), 0);
    assert_eq!(page.total_count(), None);
}

#[test]
fn test_token_sets_page_number() {
    let page = Page::create(Some("3"), Some(25), 10, 100).unwrap();
    assert_eq!(page.number(), 3);
    assert_eq!(page.size(), 25);
    assert_eq!(page.offset(), 50);
}

#[test]
fn test_token_with_sign_and_leading_zeros() {
    let page = Page::create(Some("+4"), None, 10, 100).unwrap();
    assert_eq!(page.number(), 4);

    let page = Page::create(Some("007"), None, 10, 100).unwrap();
    assert_eq!(page.number(), 7);
    assert_eq!(page.token(), "7");
}

#[test_case("abc" ; "letters")]
#[test_case("a" ; "single letter")]
#[test_case("" ; "empty")]
#[test_case("1.5" ; "decimal")]
#[test_case(" 2" ; "leading space")]
#[test_case("99999999999999999999" ; "overflow")]
fn test_token_not_an_integer(token: &str) {
    let err = Page::create(Some(token), None, 10, 100).unwrap_err();
    assert!(err.is_parse_error(), "expected parse error, got {err:?}");
}

#[test_case("0" ; "zero")]
#[test_case("-1" ; "negative")]
#[test_case("-9223372036854775808" ; "i64 min")]
fn test_token_not_positive(token: &str) {
    let err = Page::create(Some(token), None, 10, 100).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.to_string(), "page number must be positive");
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
fn test_size_not_positive(size: i64) {
    let err = Page::create(None, Some(size), 10, 100).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.to_string(), "page size must be positive");
}

#[test]
fn test_token_checked_before_size() {
    let err = Page::create(Some("x"), Some(-1), 10, 100).unwrap_err();
    assert!(err.is_parse_error());

    let err = Page::create(Some("0"), Some(-1), 10, 100).unwrap_err();
    assert_eq!(err.to_string(), "page number must be positive");
}

#[test_case(101, 100 ; "one over")]
#[test_case(100, 100 ; "at max")]
#[test_case(i64::MAX, 100 ; "huge")]
#[test_case(42, 42 ; "within")]
fn test_size_clamped_to_max(requested: i64, expected: u64) {
    let page = Page::create(None, Some(requested), 1, 100).unwrap();
    assert_eq!(page.size(), expected);
}

#[test]
fn test_create_rejects_bad_limits() {
    let err = Page::create(None, None, 0, 100).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));

    let err = Page::create(None, None, 200, 100).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn test_from_request() {
    let request = PageRequest::new().with_token("5").with_size(30);
    let page = Page::from_request(&request, &config(10, 100)).unwrap();
    assert_eq!(page.number(), 5);
    assert_eq!(page.size(), 30);
    assert_eq!(page.offset(), 120);

    let page = Page::from_request(&PageRequest::new(), &config(15, 100)).unwrap();
    assert_eq!(page.number(), 1);
    assert_eq!(page.size(), 15);
}

#[test]
fn test_page_request_deserialize() {
    let request: PageRequest =
        serde_json::from_str(r#"{"page_token": "2", "page_size": 50}"#).unwrap();
    assert_eq!(request, PageRequest::new().with_token("2").with_size(50));

    let request: PageRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, PageRequest::default());
}

#[test]
fn test_token_round_trip() {
    let config = config(20, 100);
    for token in ["1", "2", "17", "9223372036854775807"] {
        let page = Page::new(Some(token), None, &config).unwrap();
        let again = Page::new(Some(page.token().as_str()), None, &config).unwrap();
        assert_eq!(again.number(), page.number());
    }
}

// ============================================================================
// Offset Tests
// ============================================================================

#[test_case(1, 20, 0)]
#[test_case(2, 20, 20)]
#[test_case(3, 7, 14)]
#[test_case(10, 100, 900)]
fn test_offset(number: u64, size: i64, expected: u64) {
    let page = Page::create(Some(number.to_string().as_str()), Some(size), 10, 100).unwrap();
    assert_eq!(page.offset(), expected);
    assert_eq!(page.offset(), (page.number() - 1) * page.size());
}

#[test]
fn test_offset_saturates() {
    let page = Page::create(Some("9223372036854775807"), Some(100), 10, 100).unwrap();
    assert_eq!(page.offset(), u64::MAX);
}

#[test]
fn test_limit_offset_clause() {
    let page = Page::create(Some("3"), Some(25), 10, 100).unwrap();
    assert_eq!(page.limit_offset_clause(), "LIMIT 25 OFFSET 50");

    let page = Page::create(None, None, 10, 100).unwrap();
    assert_eq!(page.limit_offset_clause(), "LIMIT 10 OFFSET 0");
}

// ============================================================================
// Next Token Tests
// ============================================================================

#[test]
fn test_next_token_full_page() {
    let page = Page::create(None, None, 2, 100).unwrap();
    assert_eq!(page.next_token(2), Some("2".to_string()));
}

#[test]
fn test_next_token_with_current_token() {
    let page = Page::create(Some("2"), None, 2, 100).unwrap();
    assert_eq!(page.next_token(2), Some("3".to_string()));
}

#[test]
fn test_next_token_short_page() {
    let page = Page::create(None, Some(10), 10, 100).unwrap();
    assert_eq!(page.next_token(2), None);
    assert_eq!(page.next_token(0), None);
    assert_eq!(page.next_token(9), None);
}

#[test]
fn test_next_token_without_total_only_checks_short_page() {
    let page = Page::create(Some("4"), Some(10), 10, 100).unwrap();
    for observed in 0..30 {
        assert_eq!(page.next_token(observed).is_none(), observed < 10);
    }
}

#[test]
fn test_next_token_total_count_enough() {
    let page = Page::create(None, Some(20), 20, 100)
        .unwrap()
        .with_total_count(40);
    assert_eq!(page.next_token(20), Some("2".to_string()));
}

#[test]
fn test_next_token_total_count_not_enough() {
    let page = Page::create(Some("2"), Some(20), 20, 100)
        .unwrap()
        .with_total_count(40);
    assert_eq!(page.next_token(20), None);
}

#[test_case(1 ; "one page")]
#[test_case(3 ; "three pages")]
#[test_case(7 ; "seven pages")]
fn test_next_token_at_total_boundary(k: u64) {
    let size = 20;
    let token = k.to_string();

    let exact = Page::create(Some(token.as_str()), Some(size as i64), 20, 100)
        .unwrap()
        .with_total_count(k * size);
    assert_eq!(exact.next_token(size), None);

    let one_more = Page::create(Some(token.as_str()), Some(size as i64), 20, 100)
        .unwrap()
        .with_total_count(k * size + 1);
    assert_eq!(one_more.next_token(size), Some((k + 1).to_string()));
}

#[test]
fn test_next_token_short_page_wins_over_total() {
    let page = Page::create(None, Some(20), 20, 100)
        .unwrap()
        .with_total_count(1000);
    assert_eq!(page.next_token(19), None);
}

// ============================================================================
// Total Count Tests
// ============================================================================

#[test]
fn test_total_count_set_once() {
    let mut page = Page::create(None, None, 20, 100).unwrap();
    page.set_total_count(40);
    page.set_total_count(400);
    assert_eq!(page.total_count(), Some(40));

    let page = page.with_total_count(41);
    assert_eq!(page.total_count(), Some(40));
}

#[test]
fn test_total_count_zero_stays_unknown() {
    let mut page = Page::create(None, None, 20, 100).unwrap();
    page.set_total_count(0);
    assert_eq!(page.total_count(), None);

    page.set_total_count(12);
    assert_eq!(page.total_count(), Some(12));
}

// ============================================================================
// Pages Count Tests
// ============================================================================

#[test]
fn test_pages_count_unknown() {
    let page = Page::create(None, None, 1, 100).unwrap();
    assert_eq!(page.pages_count(), 0);
}

#[test_case(20, 5, 1 ; "partial page")]
#[test_case(20, 20, 1 ; "one full page")]
#[test_case(20, 21, 2 ; "one row over")]
#[test_case(20, 40, 2 ; "two full pages")]
#[test_case(20, 41, 3 ; "two pages and one row")]
#[test_case(1, 7, 7 ; "single row pages")]
fn test_pages_count(size: u64, total: u64, expected: u64) {
    let page = Page::create(None, None, size, 100)
        .unwrap()
        .with_total_count(total);
    assert_eq!(page.pages_count(), expected);
}

// ============================================================================
// PageInfo Tests
// ============================================================================

#[test]
fn test_page_info_with_total() {
    let page = Page::create(Some("2"), Some(20), 10, 100)
        .unwrap()
        .with_total_count(41);

    let info = page.page_info(20);
    assert_eq!(
        info,
        PageInfo {
            token: "2".to_string(),
            size: 20,
            offset: 20,
            next_token: Some("3".to_string()),
            total_count: Some(41),
            pages_count: Some(3),
        }
    );
    assert!(info.has_next());
}

#[test]
fn test_page_info_before_query() {
    let page = Page::create(None, None, 10, 100).unwrap();
    let info = PageInfo::from_page(&page, None);
    assert_eq!(info.next_token, None);
    assert_eq!(info.total_count, None);
    assert_eq!(info.pages_count, None);
    assert!(!info.has_next());
}

#[test]
fn test_page_info_serialization_skips_unknowns() {
    let page = Page::create(None, None, 10, 100).unwrap();
    let json = serde_json::to_value(page.page_info(3)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"token": "1", "size": 10, "offset": 0})
    );
}
