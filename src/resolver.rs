//! The [`LeadImageResolver`], which holds shared configuration and runs both strategies.
//!
//! ## Example
//!
//! ```rust
//! use leadimage::{LeadImageResolver, Strategy};
//!
//! let html = r#"
//!     <html>
//!     <head><meta property="og:image" content="https://example.com/cover.jpg"></head>
//!     <body><img src="https://example.com/inline.jpg" width="640" height="480"></body>
//!     </html>
//! "#;
//!
//! let resolver = LeadImageResolver::default();
//! let image = resolver.resolve_html(html).unwrap();
//!
//! assert_eq!(image.url, "https://example.com/cover.jpg");
//! assert_eq!(image.strategy, Strategy::SocialTags);
//! ```

use crate::{
    error::{LeadImageError, Result},
    lead_image::{LeadImage, Strategy},
    options::ResolverOptions,
    page::resolve_page_with,
    rules::RuleTable,
    social::resolve_social_with,
};
use scraper::Html;
use std::sync::Arc;

/// Resolves the lead image of parsed documents.
///
/// A resolver is immutable once built. Cloning it shares the compiled rule
/// table, and it can be used from several threads at once as long as each
/// call gets a document nobody is mutating.
#[derive(Debug, Clone)]
pub struct LeadImageResolver {
    /// Compiled scoring rules
    rules: Arc<RuleTable>,

    /// Configuration options
    options: ResolverOptions,
}

impl LeadImageResolver {
    /// Create a resolver, compiling any extra rules in `options`.
    ///
    /// # Errors
    /// [`LeadImageError::InvalidPattern`] if an extra rule does not compile,
    /// [`LeadImageError::InvalidOptions`] if the strategy order repeats a strategy.
    pub fn new(options: ResolverOptions) -> Result<Self> {
        let [first, second] = options.strategy_order;
        if first == second {
            return Err(LeadImageError::InvalidOptions(format!(
                "strategy order lists {first} twice"
            )));
        }

        let rules = if options.extra_rules.is_empty() {
            RuleTable::default_table()
        } else {
            Arc::new(RuleTable::with_rules(&options.extra_rules)?)
        };

        Ok(Self { rules, options })
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Lead image among the document's `<img>` elements.
    pub fn from_page(&self, document: &Html) -> Option<String> {
        resolve_page_with(document, &self.rules, &self.options)
    }

    /// Lead image declared by the document's social metadata.
    pub fn from_social_tags(&self, document: &Html) -> Option<String> {
        resolve_social_with(document, &self.options)
    }

    /// Run a single strategy.
    pub fn run(&self, strategy: Strategy, document: &Html) -> Option<String> {
        match strategy {
            Strategy::SocialTags => self.from_social_tags(document),
            Strategy::PageScan => self.from_page(document),
        }
    }

    /// Try each strategy in the configured order and keep the first hit.
    pub fn resolve(&self, document: &Html) -> Option<LeadImage> {
        let found = self
            .options
            .strategy_order
            .iter()
            .find_map(|&strategy| {
                self.run(strategy, document)
                    .map(|url| LeadImage { url, strategy })
            });

        match &found {
            Some(image) => log::debug!("lead image {} via {}", image.url, image.strategy),
            None => log::debug!("no lead image found"),
        }
        found
    }

    /// Parse `html` and [`resolve`](Self::resolve) it.
    pub fn resolve_html(&self, html: &str) -> Option<LeadImage> {
        let document = Html::parse_document(html);
        self.resolve(&document)
    }
}

impl Default for LeadImageResolver {
    fn default() -> Self {
        Self {
            rules: RuleTable::default_table(),
            options: ResolverOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: &str = r#"
        <html>
        <head><meta property="og:image" content="https://example.com/cover.jpg"></head>
        <body><img src="https://example.com/inline.jpg" width="640" height="480"></body>
        </html>
    "#;

    #[test]
    fn test_social_tags_first_by_default() {
        let image = LeadImageResolver::default().resolve_html(BOTH).unwrap();
        assert_eq!(image.url, "https://example.com/cover.jpg");
        assert_eq!(image.strategy, Strategy::SocialTags);
    }

    #[test]
    fn test_falls_back_to_page_scan() {
        let html = r#"<html><body><img src="https://example.com/inline.jpg"></body></html>"#;
        let image = LeadImageResolver::default().resolve_html(html).unwrap();
        assert_eq!(image.url, "https://example.com/inline.jpg");
        assert_eq!(image.strategy, Strategy::PageScan);
    }

    #[test]
    fn test_custom_strategy_order() {
        let options = ResolverOptions::builder()
            .strategy_order([Strategy::PageScan, Strategy::SocialTags])
            .build();
        let image = LeadImageResolver::new(options)
            .unwrap()
            .resolve_html(BOTH)
            .unwrap();
        assert_eq!(image.url, "https://example.com/inline.jpg");
        assert_eq!(image.strategy, Strategy::PageScan);
    }

    #[test]
    fn test_repeated_strategy_is_rejected() {
        let options = ResolverOptions::builder()
            .strategy_order([Strategy::PageScan, Strategy::PageScan])
            .build();
        assert!(matches!(
            LeadImageResolver::new(options),
            Err(LeadImageError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_invalid_extra_rule_is_rejected() {
        let options = ResolverOptions::builder().rule("[", 1).build();
        assert!(matches!(
            LeadImageResolver::new(options),
            Err(LeadImageError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_extra_rules_change_page_winner() {
        let html = r#"
            <img src="https://example.com/hero.jpg">
            <img src="https://example.com/other.jpg">
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            LeadImageResolver::default().from_page(&document).as_deref(),
            Some("https://example.com/other.jpg")
        );

        let resolver =
            LeadImageResolver::new(ResolverOptions::builder().rule("hero", 2).build()).unwrap();
        assert_eq!(
            resolver.from_page(&document).as_deref(),
            Some("https://example.com/hero.jpg")
        );
    }

    #[test]
    fn test_significant_surface_threshold_is_configurable() {
        let html = r#"
            <img src="https://example.com/media/a.jpg" width="10" height="10">
            <img src="https://example.com/b.jpg" width="20" height="20">
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            LeadImageResolver::default().from_page(&document).as_deref(),
            Some("https://example.com/media/a.jpg")
        );

        let resolver =
            LeadImageResolver::new(ResolverOptions::builder().significant_surface(100).build())
                .unwrap();
        assert_eq!(
            resolver.from_page(&document).as_deref(),
            Some("https://example.com/b.jpg")
        );
    }

    #[test]
    fn test_empty_document_resolves_to_none() {
        let resolver = LeadImageResolver::default();
        let document = Html::parse_document("");
        assert_eq!(resolver.from_page(&document), None);
        assert_eq!(resolver.from_social_tags(&document), None);
        assert_eq!(resolver.resolve(&document), None);
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LeadImageResolver>();

        let resolver = Arc::new(LeadImageResolver::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || resolver.resolve_html(BOTH))
            })
            .collect();
        for handle in handles {
            let image = handle.join().unwrap().unwrap();
            assert_eq!(image.url, "https://example.com/cover.jpg");
        }
    }
}
