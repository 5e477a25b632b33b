//! Lead image selection from social metadata (Open Graph and Twitter Cards).
//!
//! `meta` and `link` elements are matched against a fixed table of known
//! image declarations. A single declaration wins outright. With several, each
//! gets a point for a `large`/`big` hint in its url and a point for being a
//! Twitter Card image, and the best scored one wins, ties going to the later
//! declaration.

use crate::constants::LARGE_BIG;
use crate::dom_utils::{last_max_by, with_http_prefix};
use crate::options::ResolverOptions;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static META_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("meta, link").unwrap());

/// Network a social image declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialFamily {
    Facebook,
    Twitter,
}

/// One shape of social image declaration.
///
/// An element matches when `locator_attribute` equals `locator_value` and
/// `value_attribute` holds the image url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialTagSpec {
    pub family: SocialFamily,
    pub locator_attribute: &'static str,
    pub locator_value: &'static str,
    pub value_attribute: &'static str,
}

impl SocialTagSpec {
    /// Url declared by `element` under this shape.
    pub fn extract<'a>(&self, element: &ElementRef<'a>) -> Option<&'a str> {
        let element = element.value();
        if element.attr(self.locator_attribute) != Some(self.locator_value) {
            return None;
        }
        element
            .attr(self.value_attribute)
            .filter(|value| !value.is_empty())
    }
}

/// Known social image declarations.
pub const SOCIAL_TAG_SPECS: [SocialTagSpec; 4] = [
    SocialTagSpec {
        family: SocialFamily::Facebook,
        locator_attribute: "property",
        locator_value: "og:image",
        value_attribute: "content",
    },
    SocialTagSpec {
        family: SocialFamily::Facebook,
        locator_attribute: "rel",
        locator_value: "image_src",
        value_attribute: "href",
    },
    SocialTagSpec {
        family: SocialFamily::Twitter,
        locator_attribute: "name",
        locator_value: "twitter:image",
        value_attribute: "value",
    },
    SocialTagSpec {
        family: SocialFamily::Twitter,
        locator_attribute: "name",
        locator_value: "twitter:image",
        value_attribute: "content",
    },
];

/// A declared social image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialImageCandidate {
    pub url: String,
    pub family: SocialFamily,
    pub score: i64,
}

impl SocialImageCandidate {
    fn rate(&mut self) {
        if LARGE_BIG.is_match(&self.url) {
            self.score += 1;
        }
        if self.family == SocialFamily::Twitter {
            self.score += 1;
        }
    }
}

/// Every social image declared in `document`, in document order, scored 0.
///
/// An element matching several shapes yields one candidate per shape.
pub fn collect_social_candidates(
    document: &Html,
    options: &ResolverOptions,
) -> Vec<SocialImageCandidate> {
    let mut candidates = Vec::new();

    for element in document
        .select(&META_LINK_SELECTOR)
        .take(options.element_limit())
    {
        for spec in &SOCIAL_TAG_SPECS {
            if let Some(url) = spec.extract(&element) {
                log::debug!("social tags: {:?} candidate {}", spec.family, url);
                candidates.push(SocialImageCandidate {
                    url: url.to_string(),
                    family: spec.family,
                    score: 0,
                });
            }
        }
    }

    candidates
}

/// Winner among `candidates`, rating them first when there is more than one.
pub fn select_social_candidate(
    candidates: &mut [SocialImageCandidate],
) -> Option<&SocialImageCandidate> {
    if candidates.len() == 1 {
        return candidates.first();
    }

    for candidate in candidates.iter_mut() {
        candidate.rate();
    }
    last_max_by(candidates, |candidate| candidate.score)
}

pub(crate) fn resolve_social_with(document: &Html, options: &ResolverOptions) -> Option<String> {
    let mut candidates = collect_social_candidates(document, options);
    let total = candidates.len();
    let best = select_social_candidate(&mut candidates)?;
    log::debug!(
        "social tags: picked {} (score {}) among {} candidates",
        best.url,
        best.score,
        total
    );
    Some(with_http_prefix(best.url.clone()))
}

/// Pick the lead image declared by the document's social metadata.
///
/// Returns `None` when nothing is declared.
pub fn resolve_from_social_tags(document: &Html) -> Option<String> {
    resolve_social_with(document, &ResolverOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(html: &str) -> Option<String> {
        resolve_from_social_tags(&Html::parse_document(html))
    }

    fn candidates(html: &str) -> Vec<SocialImageCandidate> {
        collect_social_candidates(&Html::parse_document(html), &ResolverOptions::default())
    }

    #[test]
    fn test_single_og_image_wins_outright() {
        let html = r#"
            <html><head>
                <meta property="og:image" content="https://example.com/thumb-small.jpg">
            </head></html>
        "#;
        assert_eq!(resolve(html).as_deref(), Some("https://example.com/thumb-small.jpg"));
    }

    #[test]
    fn test_single_candidate_is_prefixed() {
        let html = r#"<html><head><link rel="image_src" href="//cdn.example.com/x.jpg"></head></html>"#;
        assert_eq!(resolve(html).as_deref(), Some("http:////cdn.example.com/x.jpg"));
    }

    #[test]
    fn test_twitter_large_beats_facebook() {
        let html = r#"
            <html><head>
                <meta name="twitter:image" content="https://example.com/large/card.jpg">
                <meta property="og:image" content="https://example.com/og.jpg">
            </head></html>
        "#;
        let mut found = candidates(html);
        let best = select_social_candidate(&mut found).unwrap();
        assert_eq!(best.url, "https://example.com/large/card.jpg");
        assert_eq!(best.score, 2);
        assert_eq!(found[1].score, 0);
    }

    #[test]
    fn test_all_zero_scores_pick_last() {
        let html = r#"
            <html><head>
                <meta property="og:image" content="https://example.com/one.jpg">
                <link rel="image_src" href="https://example.com/two.jpg">
            </head></html>
        "#;
        assert_eq!(resolve(html).as_deref(), Some("https://example.com/two.jpg"));
    }

    #[test]
    fn test_element_matching_two_shapes_yields_two_candidates() {
        let html = r#"
            <html><head>
                <meta name="twitter:image" value="https://example.com/v.jpg" content="https://example.com/c.jpg">
            </head></html>
        "#;
        let found = candidates(html);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].url, "https://example.com/v.jpg");
        assert_eq!(found[1].url, "https://example.com/c.jpg");
        assert!(found.iter().all(|c| c.family == SocialFamily::Twitter));
        assert_eq!(resolve(html).as_deref(), Some("https://example.com/c.jpg"));
    }

    #[test]
    fn test_unrelated_and_incomplete_tags_are_ignored() {
        let html = r#"
            <html><head>
                <meta property="og:title" content="Title">
                <meta property="og:image">
                <meta property="og:image" content="">
                <meta name="og:image" content="https://example.com/wrong-attribute.jpg">
                <link rel="stylesheet" href="/style.css">
            </head></html>
        "#;
        assert!(candidates(html).is_empty());
        assert_eq!(resolve(html), None);
    }

    #[test]
    fn test_link_and_meta_keep_document_order() {
        let html = r#"
            <html><head>
                <link rel="image_src" href="https://example.com/first.jpg">
                <meta property="og:image" content="https://example.com/second.jpg">
            </head></html>
        "#;
        let urls: Vec<_> = candidates(html).into_iter().map(|c| c.url).collect();
        assert_eq!(urls, ["https://example.com/first.jpg", "https://example.com/second.jpg"]);
    }

    #[test]
    fn test_size_hint_breaks_facebook_tie() {
        let html = r#"
            <html><head>
                <meta property="og:image" content="https://example.com/big.jpg">
                <meta property="og:image" content="https://example.com/small.jpg">
            </head></html>
        "#;
        assert_eq!(resolve(html).as_deref(), Some("https://example.com/big.jpg"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(resolve("<html><head></head><body></body></html>"), None);
    }
}
