//! Small helpers over scraper elements and candidate urls.

use crate::constants::{HTTP_PREFIX, HTTP_SCHEME};
use scraper::ElementRef;

/// Value of the first attribute in `names` that is present and non-empty.
pub fn first_non_empty_attr<'a>(element: &ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| element.value().attr(name))
        .find(|value| !value.is_empty())
}

/// Attribute value, treating an empty value as undeclared.
pub fn declared_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|value| !value.is_empty())
}

/// Parse a declared dimension; anything that is not a plain signed integer is 0.
pub fn parse_dimension(value: &str) -> i64 {
    value.parse::<i64>().unwrap_or(0)
}

/// Surface of an element from its declared `width`/`height`.
///
/// Only when both are declared is this an area; a lone width or height is
/// used as the surface on its own.
pub fn declared_surface(width: Option<&str>, height: Option<&str>) -> i64 {
    match (width.map(parse_dimension), height.map(parse_dimension)) {
        (Some(w), Some(h)) => w.saturating_mul(h),
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (None, None) => 0,
    }
}

/// Prepend `http://` to anything that does not already start with `http`.
///
/// The prefix is added literally: `//cdn.example.com/x.jpg` becomes
/// `http:////cdn.example.com/x.jpg`.
pub fn with_http_prefix(url: String) -> String {
    if url.starts_with(HTTP_SCHEME) {
        url
    } else {
        format!("{HTTP_PREFIX}{url}")
    }
}

/// Last item whose key reaches the running maximum, starting from 0.
///
/// Ties go to the later item. Items whose key never reaches 0 are never
/// picked, so `None` means nothing qualified.
pub fn last_max_by<T>(items: &[T], key: impl Fn(&T) -> i64) -> Option<&T> {
    let mut max = 0;
    let mut best = None;
    for item in items {
        let value = key(item);
        if value >= max {
            max = value;
            best = Some(item);
        }
    }
    best
}
