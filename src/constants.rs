//! Process-wide constants shared by both resolvers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Declared surface above which an image is considered significant (320x200).
pub const SIGNIFICANT_SURFACE: i64 = 320 * 200;

/// Scheme marker checked before normalizing a winning url.
pub const HTTP_SCHEME: &str = "http";

/// Prefix prepended to urls that do not start with [`HTTP_SCHEME`].
pub const HTTP_PREFIX: &str = "http://";

/// Attributes consulted, in order, for the source of an `<img>`.
pub const IMG_SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy-src"];

/// Substring in an `alt` text that costs an image one point.
pub const ALT_THUMBNAIL: &str = "thumbnail";

/// Size hint shared by the rule table and social scoring.
pub static LARGE_BIG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(large|big)").unwrap());
