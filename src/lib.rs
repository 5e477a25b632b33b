//! # leadimage
//!
//! Picks the single most representative "lead image" of a parsed web article.
//!
//! ## Overview
//!
//! Two independent strategies turn a noisy set of candidate images into one url:
//!
//! - **Social tags**: Open Graph (`og:image`, `rel="image_src"`) and Twitter Card
//!   (`twitter:image`) declarations in `meta`/`link` elements
//! - **Page scan**: the inline `<img>` elements, rated by declared surface and
//!   by a fixed table of pattern/weight rules over their source
//!
//! Both are pure functions of a [`scraper::Html`] document. Nothing is fetched and
//! no image is decoded: surface comes from the declared `width`/`height` only.
//!
//! ## Basic Usage
//!
//! ```rust
//! use leadimage::{resolve_from_page, resolve_from_social_tags};
//! use scraper::Html;
//!
//! let html = r#"
//!     <html>
//!     <head><meta name="twitter:image" content="https://example.com/card.jpg"></head>
//!     <body><img src="https://example.com/photo.jpg"></body>
//!     </html>
//! "#;
//! let document = Html::parse_document(html);
//!
//! assert_eq!(
//!     resolve_from_social_tags(&document).as_deref(),
//!     Some("https://example.com/card.jpg")
//! );
//! assert_eq!(
//!     resolve_from_page(&document).as_deref(),
//!     Some("https://example.com/photo.jpg")
//! );
//! ```
//!
//! ## With a Resolver
//!
//! [`LeadImageResolver`] holds compiled configuration and combines both
//! strategies, social tags first by default:
//!
//! ```rust
//! use leadimage::{LeadImageResolver, ResolverOptions, Strategy};
//!
//! let options = ResolverOptions::builder().rule("hero", 2).build();
//! let resolver = LeadImageResolver::new(options)?;
//!
//! let html = r#"<img src="/img/hero.jpg"><img src="/img/footer.jpg">"#;
//! let image = resolver.resolve_html(html).unwrap();
//!
//! assert_eq!(image.url, "http:///img/hero.jpg");
//! assert_eq!(image.strategy, Strategy::PageScan);
//! # Ok::<(), leadimage::LeadImageError>(())
//! ```
//!
//! ## Url Normalization
//!
//! A winning url that does not start with `http` gets `http://` prepended
//! verbatim. Relative and protocol-relative sources are not resolved against
//! the page, so `//cdn.example.com/x.jpg` comes back as
//! `http:////cdn.example.com/x.jpg`.

mod constants;
mod dom_utils;
mod error;
mod lead_image;
mod options;
mod page;
mod resolver;
mod rules;
mod social;

// Public exports
pub use constants::SIGNIFICANT_SURFACE;
pub use error::{LeadImageError, Result};
pub use lead_image::{LeadImage, Strategy};
pub use options::{ResolverOptions, ResolverOptionsBuilder};
pub use page::{collect_page_candidates, resolve_from_page, ImageCandidate, PageScan};
pub use resolver::LeadImageResolver;
pub use rules::{RuleTable, ScoreRule};
pub use social::{
    collect_social_candidates, resolve_from_social_tags, select_social_candidate,
    SocialFamily, SocialImageCandidate, SocialTagSpec, SOCIAL_TAG_SPECS,
};
