//! Client SDK and local heuristic estimator for the Aivis AI-visibility API.
//!
//! This crate provides:
//!
//! - An async HTTP client for the scoring API (score lookup, analysis run)
//!   with bearer-token authentication
//! - A deterministic local estimator over six observable signals
//! - A static table of five quick-win recommendations
//!
//! # Quick Start
//!
//! ```no_run
//! use aivis_sdk::{AnalyzeRequest, VisibilityClient, VisibilityConfig};
//!
//! # async fn example() -> aivis_sdk::VisibilityResult<()> {
//! let client = VisibilityClient::new(VisibilityConfig::new("aivis-key"))?;
//!
//! let score = client.get_score("acme").await?;
//! println!("visibility score: {}", score.score);
//!
//! let analysis = client
//!     .analyze(&AnalyzeRequest::new("acme").with_competitors(true))
//!     .await?;
//! for rec in analysis.recommendations {
//!     println!("{} ({} impact)", rec.action, rec.impact);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Local estimation
//!
//! The estimator needs no network access:
//!
//! ```
//! use aivis_sdk::{estimate_score, SignalBundle};
//!
//! let score = estimate_score(&SignalBundle {
//!     platform_count: 3,
//!     has_entity_record: true,
//!     content_age_months: 4.0,
//!     ..Default::default()
//! });
//! assert_eq!(score, 57);
//! ```

pub mod client;
pub mod error;
pub mod quick_wins;
pub mod score;
pub mod types;

pub use client::VisibilityClient;
pub use error::{VisibilityError, VisibilityResult};
pub use quick_wins::quick_wins;
pub use score::estimate_score;
pub use types::{
    AnalysisResult, AnalyzeRequest, CompetitorMention, PlatformScore, Recommendation, ScoreResult,
    SignalBundle, VisibilityConfig, DEFAULT_BASE_URL,
};
