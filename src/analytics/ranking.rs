use crate::types::report::ScoredLead;
use std::cmp::Ordering;

/// Number of leads listed at each end of the ranking.
pub const RANKING_SIZE: usize = 5;

fn ranked(
    scored: &[ScoredLead],
    order: impl Fn(&ScoredLead, &ScoredLead) -> Ordering,
) -> Vec<ScoredLead> {
    let mut sorted = scored.iter().collect::<Vec<_>>();
    // `sort_by` is stable: equal scores keep their input order.
    sorted.sort_by(|a, b| order(a, b));
    sorted.into_iter().take(RANKING_SIZE).cloned().collect()
}

pub fn top_leads(scored: &[ScoredLead]) -> Vec<ScoredLead> {
    ranked(scored, |a, b| b.total_score().cmp(&a.total_score()))
}

pub fn bottom_leads(scored: &[ScoredLead]) -> Vec<ScoredLead> {
    ranked(scored, |a, b| a.total_score().cmp(&b.total_score()))
}
