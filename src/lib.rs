//! Lead quality scoring and aggregate analytics.
//!
//! [`score_lead`] turns one raw lead document into an explainable
//! [`ScoreResult`]; [`score_all_leads`] fans that out over a batch and
//! reduces it to an [`AggregateReport`]. Both are pure and never fail.

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod report;
pub mod resolve;
pub mod score;
pub mod telemetry;
pub mod types;

pub use analytics::score_all_leads;
pub use error::{LeadscoreError, Result};
pub use score::score_lead;
pub use types::report::{AggregateReport, HistogramBucket, ScoredLead};
pub use types::scoring::{Category, CategoryBreakdown, CategoryScore, ScoreResult, Signal, Tier};
