use crate::types::scoring::{Category, Score, ScoreResult, Tier};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A raw lead paired with its scoring. Serialized as `{lead, scoring}`, an
/// envelope the resolver unwraps, so scoring it again gives the same result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    pub lead: Value,
    pub scoring: ScoreResult,
}

impl ScoredLead {
    pub fn total_score(&self) -> Score {
        self.scoring.total_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub label: String,
    pub min: Score,
    pub max: Score,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub scored: Vec<ScoredLead>,
    pub distribution: BTreeMap<Tier, usize>,
    pub histogram: Vec<HistogramBucket>,
    pub category_averages: BTreeMap<Category, Score>,
    pub avg_score: Score,
    pub top_leads: Vec<ScoredLead>,
    pub bottom_leads: Vec<ScoredLead>,
    pub total: usize,
}
