//! Request and response types for the visibility API.

use serde::{Deserialize, Serialize};

/// The six observable signals used by the local estimator.
///
/// Constructed by the caller, consumed by [`estimate_score`], discarded.
/// Fields are deliberately not validated; see `estimate_score` for how
/// out-of-range values behave.
///
/// [`estimate_score`]: crate::estimate_score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalBundle {
    /// Number of AI platforms where the brand is visible.
    pub platform_count: u32,

    /// Brand has a knowledge-graph entity record (e.g. Wikidata).
    pub has_entity_record: bool,

    /// Brand has a claimed business listing (e.g. Google Business).
    pub has_business_listing: bool,

    /// Site carries structured markup (schema.org).
    pub has_structured_markup: bool,

    /// Age of the freshest relevant content, in months.
    pub content_age_months: f64,

    /// Site publishes comparison ("X vs Y") content.
    pub has_comparison_content: bool,
}

/// Score returned by `GET /score/{brand}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Brand the score was computed for.
    pub brand: String,

    /// Visibility score in [0, 100].
    pub score: u32,

    /// Human-readable summary.
    #[serde(default)]
    pub summary: Option<String>,

    /// Per-platform breakdown.
    #[serde(default)]
    pub platforms: Vec<PlatformScore>,
}

/// Per-platform visibility entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformScore {
    /// Platform name (e.g. "chatgpt", "perplexity").
    pub platform: String,

    /// Platform-local score in [0, 100].
    pub score: u32,

    /// Whether the brand was mentioned at all on this platform.
    #[serde(default)]
    pub mentioned: bool,
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Query or brand to analyze.
    pub query: String,

    /// Include competitor mentions in the analysis.
    pub include_competitors: bool,

    /// Platforms to analyze; empty means the API default set.
    pub platforms: Vec<String>,
}

impl AnalyzeRequest {
    /// Analysis request for a query, competitors off, default platforms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            include_competitors: false,
            platforms: Vec::new(),
        }
    }

    /// Include competitor mentions.
    pub fn with_competitors(mut self, include: bool) -> Self {
        self.include_competitors = include;
        self
    }

    /// Restrict the analysis to specific platforms.
    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }
}

/// Response from `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Query that was analyzed.
    pub query: String,

    /// Overall visibility score in [0, 100].
    pub score: u32,

    /// Improvement recommendations, ordered by impact.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,

    /// Competitor mentions (present when requested).
    #[serde(default)]
    pub competitors: Vec<CompetitorMention>,

    /// Human-readable summary.
    #[serde(default)]
    pub summary: Option<String>,
}

/// A competitor surfaced during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorMention {
    /// Competitor name.
    pub name: String,

    /// Competitor visibility score in [0, 100].
    pub score: u32,
}

/// An improvement suggestion with impact/effort labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// What to do.
    pub action: String,

    /// Expected impact ("High", "Medium", "Low").
    pub impact: String,

    /// Effort required ("High", "Medium", "Low").
    pub effort: String,

    /// How to do it.
    pub details: String,
}

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.aivis.dev/v1";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct VisibilityConfig {
    /// API key, sent as a bearer token on every request.
    pub api_key: String,

    /// Base URL for the API.
    pub base_url: String,
}

impl VisibilityConfig {
    /// Config with the default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, used verbatim.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
