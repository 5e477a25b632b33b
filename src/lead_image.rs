//! The resolved lead image and the strategy that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independent ways a lead image can be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Open Graph / Twitter Card `meta` and `link` declarations.
    SocialTags,
    /// Scan of the inline `<img>` elements.
    PageScan,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::SocialTags => f.write_str("social_tags"),
            Strategy::PageScan => f.write_str("page_scan"),
        }
    }
}

/// A lead image chosen for an article.
///
/// Serializes to JSON as `{"url": "...", "strategy": "social_tags"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadImage {
    /// Winning url, with `http://` prepended when it did not start with `http`.
    pub url: String,

    /// Which strategy found it.
    pub strategy: Strategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case_strategy() {
        let image = LeadImage {
            url: "https://example.com/a.jpg".to_string(),
            strategy: Strategy::SocialTags,
        };
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://example.com/a.jpg","strategy":"social_tags"}"#
        );
        assert_eq!(Strategy::PageScan.to_string(), "page_scan");
    }
}
