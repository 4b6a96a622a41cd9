//! Population-level analytics over a batch of scored leads.

pub mod ranking;

use crate::score::score_lead;
use crate::types::report::{AggregateReport, HistogramBucket, ScoredLead};
use crate::types::scoring::{Category, Score, Tier};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

pub const HISTOGRAM_BUCKETS: usize = 10;
const BUCKET_WIDTH: Score = 10;

pub fn score_all_leads(records: &[Value]) -> AggregateReport {
    let scored = records
        .iter()
        .map(|record| ScoredLead {
            lead: record.clone(),
            scoring: score_lead(record),
        })
        .collect::<Vec<_>>();

    let report = summarize(scored);
    info!(
        total = report.total,
        avg_score = report.avg_score,
        "scored lead batch"
    );
    report
}

pub fn summarize(scored: Vec<ScoredLead>) -> AggregateReport {
    AggregateReport {
        distribution: distribution(&scored),
        histogram: histogram(&scored),
        category_averages: category_averages(&scored),
        avg_score: average_score(&scored),
        top_leads: ranking::top_leads(&scored),
        bottom_leads: ranking::bottom_leads(&scored),
        total: scored.len(),
        scored,
    }
}

pub fn distribution(scored: &[ScoredLead]) -> BTreeMap<Tier, usize> {
    let mut counts = Tier::DESCENDING
        .iter()
        .map(|tier| (*tier, 0))
        .collect::<BTreeMap<_, _>>();
    for lead in scored {
        *counts.entry(lead.scoring.tier).or_default() += 1;
    }
    counts
}

/// A perfect 100 lands in the top bucket rather than an eleventh one.
pub fn bucket_index(total_score: Score) -> usize {
    usize::from(total_score / BUCKET_WIDTH).min(HISTOGRAM_BUCKETS - 1)
}

pub fn histogram(scored: &[ScoredLead]) -> Vec<HistogramBucket> {
    let mut buckets = (0..HISTOGRAM_BUCKETS)
        .map(|index| {
            let min = index as Score * BUCKET_WIDTH;
            let max = min + BUCKET_WIDTH - 1;
            HistogramBucket {
                label: format!("{min}-{max}"),
                min,
                max,
                count: 0,
            }
        })
        .collect::<Vec<_>>();
    for lead in scored {
        buckets[bucket_index(lead.total_score())].count += 1;
    }
    buckets
}

pub fn category_averages(scored: &[ScoredLead]) -> BTreeMap<Category, Score> {
    Category::ALL
        .iter()
        .map(|category| {
            let average = rounded_mean(
                scored
                    .iter()
                    .map(|lead| lead.scoring.category_score(*category)),
            );
            (*category, average)
        })
        .collect()
}

pub fn average_score(scored: &[ScoredLead]) -> Score {
    rounded_mean(scored.iter().map(ScoredLead::total_score))
}

/// Mean rounded half-up; an empty input averages to zero.
fn rounded_mean(values: impl Iterator<Item = Score>) -> Score {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), value| {
        (sum + u64::from(value), count + 1)
    });
    if count == 0 {
        return 0;
    }
    ((2 * sum + count) / (2 * count)) as Score
}
