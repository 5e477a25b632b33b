//! Lead image selection from the inline `<img>` elements of a page.
//!
//! Every image with a source becomes a candidate carrying its declared surface
//! and its rule score. Images scoring below zero (ads, icons, pixels) are
//! dropped. When at least one image on the page declares a surface above the
//! significant threshold the largest candidate wins, otherwise the best scored
//! one does. In both cases a tie goes to the later image.
//!
//! ```rust
//! use leadimage::resolve_from_page;
//! use scraper::Html;
//!
//! let html = r#"
//!     <img src="https://example.com/logo.png" width="800" height="600">
//!     <img src="https://example.com/photo.jpg" width="640" height="480">
//! "#;
//! let document = Html::parse_document(html);
//!
//! assert_eq!(
//!     resolve_from_page(&document).as_deref(),
//!     Some("https://example.com/photo.jpg")
//! );
//! ```

use crate::constants::{ALT_THUMBNAIL, IMG_SOURCE_ATTRS};
use crate::dom_utils::{
    declared_attr, declared_surface, first_non_empty_attr, last_max_by, with_http_prefix,
};
use crate::options::ResolverOptions;
use crate::rules::RuleTable;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// An inline image that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub url: String,
    pub surface: i64,
    pub score: i64,
}

/// Outcome of one pass over the `<img>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageScan {
    /// Non-negative scored images, in document order.
    pub candidates: Vec<ImageCandidate>,

    /// Images with a source whose surface exceeds the significant threshold,
    /// counted whatever their score.
    pub significant_count: usize,
}

impl PageScan {
    /// The winning candidate, if any.
    pub fn best(&self) -> Option<&ImageCandidate> {
        if self.significant_count > 0 {
            last_max_by(&self.candidates, |candidate| candidate.surface)
        } else {
            last_max_by(&self.candidates, |candidate| candidate.score)
        }
    }
}

/// Score of an image element with source `src`: rule score plus the `alt` penalty.
fn score_image(element: &ElementRef, src: &str, rules: &RuleTable) -> i64 {
    let mut score = rules.score_source(src);
    if element
        .value()
        .attr("alt")
        .is_some_and(|alt| alt.contains(ALT_THUMBNAIL))
    {
        score -= 1;
    }
    score
}

/// Walk every `<img>` in `document` and collect candidates.
pub fn collect_page_candidates(
    document: &Html,
    rules: &RuleTable,
    options: &ResolverOptions,
) -> PageScan {
    let mut scan = PageScan::default();

    for img in document.select(&IMG_SELECTOR).take(options.element_limit()) {
        let Some(src) = first_non_empty_attr(&img, &IMG_SOURCE_ATTRS) else {
            continue;
        };

        let surface =
            declared_surface(declared_attr(&img, "width"), declared_attr(&img, "height"));
        if surface > options.significant_surface {
            scan.significant_count += 1;
        }

        let score = score_image(&img, src, rules);
        if score < 0 {
            log::debug!("page scan: dropping {} (score {})", src, score);
            continue;
        }

        log::debug!("page scan: candidate {} (surface {}, score {})", src, surface, score);
        scan.candidates.push(ImageCandidate {
            url: src.to_string(),
            surface,
            score,
        });
    }

    scan
}

/// Page scan with an explicit rule table and options.
pub(crate) fn resolve_page_with(
    document: &Html,
    rules: &RuleTable,
    options: &ResolverOptions,
) -> Option<String> {
    let scan = collect_page_candidates(document, rules, options);
    let best = scan.best()?;
    log::debug!(
        "page scan: picked {} by {} among {} candidates",
        best.url,
        if scan.significant_count > 0 { "surface" } else { "score" },
        scan.candidates.len()
    );
    Some(with_http_prefix(best.url.clone()))
}

/// Pick the lead image among the page's `<img>` elements using the built-in rules.
///
/// Returns `None` when no image qualifies.
pub fn resolve_from_page(document: &Html) -> Option<String> {
    resolve_page_with(
        document,
        &RuleTable::default_table(),
        &ResolverOptions::default(),
    )
}
