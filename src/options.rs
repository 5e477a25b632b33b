//! Configuration options for lead image resolution.
//!
//! This module provides [`ResolverOptions`] and [`ResolverOptionsBuilder`].
//! The defaults reproduce the stock heuristics; every knob is optional.
//!
//! ## Example
//!
//! ```rust
//! use leadimage::{LeadImageResolver, ResolverOptions, Strategy};
//!
//! let options = ResolverOptions::builder()
//!     .significant_surface(400 * 300)
//!     .rule("hero", 2)
//!     .strategy_order([Strategy::PageScan, Strategy::SocialTags])
//!     .build();
//!
//! let resolver = LeadImageResolver::new(options).unwrap();
//! ```

use crate::constants::SIGNIFICANT_SURFACE;
use crate::lead_image::Strategy;

/// Configuration for [`LeadImageResolver`](crate::LeadImageResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Declared surface an `<img>` must exceed for the page scan to pick by
    /// surface instead of by score.
    ///
    /// Default: `64000` (320x200)
    pub significant_surface: i64,

    /// Extra `(pattern, weight)` scoring rules appended to the built-in table.
    ///
    /// Patterns are regular expressions; they are compiled when the resolver
    /// is constructed.
    ///
    /// Default: empty
    pub extra_rules: Vec<(String, i64)>,

    /// Order in which [`resolve`](crate::LeadImageResolver::resolve) consults
    /// the two strategies. The second only runs when the first finds nothing.
    ///
    /// Default: `[SocialTags, PageScan]`
    pub strategy_order: [Strategy; 2],

    /// Maximum number of elements each scan looks at. 0 disables the limit.
    ///
    /// Default: `0`
    pub max_elements: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            significant_surface: SIGNIFICANT_SURFACE,
            extra_rules: Vec::new(),
            strategy_order: [Strategy::SocialTags, Strategy::PageScan],
            max_elements: 0,
        }
    }
}

impl ResolverOptions {
    /// Creates a new builder for ResolverOptions
    pub fn builder() -> ResolverOptionsBuilder {
        ResolverOptionsBuilder::default()
    }

    /// Element limit as an iterator bound.
    pub(crate) fn element_limit(&self) -> usize {
        if self.max_elements == 0 {
            usize::MAX
        } else {
            self.max_elements
        }
    }
}

/// Builder for [`ResolverOptions`].
#[derive(Default)]
pub struct ResolverOptionsBuilder {
    significant_surface: Option<i64>,
    extra_rules: Vec<(String, i64)>,
    strategy_order: Option<[Strategy; 2]>,
    max_elements: Option<usize>,
}

impl ResolverOptionsBuilder {
    /// Set the significant surface threshold
    pub fn significant_surface(mut self, surface: i64) -> Self {
        self.significant_surface = Some(surface);
        self
    }

    /// Add a scoring rule
    pub fn rule(mut self, pattern: impl Into<String>, weight: i64) -> Self {
        self.extra_rules.push((pattern.into(), weight));
        self
    }

    /// Set the fallback order used by `resolve`
    pub fn strategy_order(mut self, order: [Strategy; 2]) -> Self {
        self.strategy_order = Some(order);
        self
    }

    /// Set maximum number of elements to scan
    pub fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Build the ResolverOptions
    pub fn build(self) -> ResolverOptions {
        let defaults = ResolverOptions::default();
        ResolverOptions {
            significant_surface: self
                .significant_surface
                .unwrap_or(defaults.significant_surface),
            extra_rules: self.extra_rules,
            strategy_order: self.strategy_order.unwrap_or(defaults.strategy_order),
            max_elements: self.max_elements.unwrap_or(defaults.max_elements),
        }
    }
}
