//! Pattern/weight rules that rate how likely an image source is to be a lead image.
//!
//! The default table rewards hints of large or uploaded media and penalizes
//! avatars, icons, tracking pixels, share buttons and ad-network assets. Every
//! rule is evaluated against the whole source string and the weights of all
//! matching rules are summed, so a source that matches both a bonus and a
//! penalty nets out:
//!
//! ```rust
//! use leadimage::RuleTable;
//!
//! let rules = RuleTable::default_table();
//! assert_eq!(rules.score_source("/upload/icon.png"), 0);
//! assert_eq!(rules.score_source("/media/large/photo.jpg"), 2);
//! ```

use crate::constants::LARGE_BIG;
use crate::error::{LeadImageError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Share buttons, junk file types and ad-serving hosts and paths.
const JUNK_PATTERN: &str = r"\.html|\.gif|\.ico|button|twitter\.jpg|facebook\.jpg|ap_buy_photo|digg\.jpg|digg\.png|delicious\.png|facebook\.png|reddit\.jpg|doubleclick|diggthis|diggThis|adserver|/ads/|ec\.atdmt\.com|mediaplex\.com|adsatt|view\.atdmt";

/// Default rules as `(pattern, weight)` pairs.
const DEFAULT_RULES: &[(&str, i64)] = &[
    ("upload", 1),
    ("media", 1),
    (r"gravatar\.com", -1),
    (r"feeds\.feedburner\.com", -1),
    ("(?i)icon", -1),
    ("(?i)logo", -1),
    ("(?i)spinner", -1),
    ("(?i)loading", -1),
    ("(?i)ads", -1),
    ("badge", -1),
    ("1x1", -1),
    ("pixel", -1),
    ("thumbnail[s]*", -1),
    (JUNK_PATTERN, -1),
];

static DEFAULT_TABLE: Lazy<Arc<RuleTable>> = Lazy::new(|| {
    let mut rules = vec![ScoreRule::from_regex(Regex::clone(&LARGE_BIG), 1)];
    rules.extend(
        DEFAULT_RULES
            .iter()
            .map(|(pattern, weight)| {
                ScoreRule::from_regex(Regex::new(pattern).unwrap(), *weight)
            }),
    );
    Arc::new(RuleTable { rules })
});

/// A single compiled pattern and the weight it contributes when it matches.
#[derive(Debug, Clone)]
pub struct ScoreRule {
    pattern: Regex,
    weight: i64,
}

impl ScoreRule {
    /// Compile `pattern` into a rule worth `weight`.
    pub fn new(pattern: &str, weight: i64) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| LeadImageError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(pattern, weight))
    }

    fn from_regex(pattern: Regex, weight: i64) -> Self {
        Self { pattern, weight }
    }

    /// Source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Weight contributed to `url`, or 0 when the pattern does not match.
    pub fn apply(&self, url: &str) -> i64 {
        if self.pattern.is_match(url) {
            log::trace!("rule `{}` matched {} ({:+})", self.pattern(), url, self.weight);
            self.weight
        } else {
            0
        }
    }
}

/// Immutable, ordered set of [`ScoreRule`]s.
///
/// Built once and shared by reference; nothing mutates a table after
/// construction, so it can be used from any number of threads at once.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ScoreRule>,
}

impl RuleTable {
    /// The built-in rule table, shared process-wide.
    pub fn default_table() -> Arc<RuleTable> {
        Arc::clone(&DEFAULT_TABLE)
    }

    /// Default rules followed by `extra` `(pattern, weight)` pairs.
    pub fn with_rules<S: AsRef<str>>(extra: &[(S, i64)]) -> Result<Self> {
        let mut rules = DEFAULT_TABLE.rules.clone();
        for (pattern, weight) in extra {
            rules.push(ScoreRule::new(pattern.as_ref(), *weight)?);
        }
        Ok(Self { rules })
    }

    /// Sum of the weights of every rule matching anywhere in `url`.
    ///
    /// All rules are evaluated; a url that matches nothing scores 0.
    pub fn score_source(&self, url: &str) -> i64 {
        self.rules.iter().map(|rule| rule.apply(url)).sum()
    }

    pub fn rules(&self) -> &[ScoreRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        DEFAULT_TABLE.as_ref().clone()
    }
}
