pub mod composite;
pub mod contact;
pub mod design;
pub mod energy;
pub mod engagement;
pub mod qualification;
pub mod tier;

use crate::resolve::{resolve, ResolvedAttributes};
use crate::types::scoring::{
    Category, CategoryBreakdown, CategoryScore, Score, ScoreResult, Signal, MAX_SCORE,
};
use serde_json::Value;
use tracing::debug;

/// Running ledger for one category. Points are summed exactly and only
/// clamped when the category is finished.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    signals: Vec<Signal>,
}

impl Tally {
    pub(crate) fn award(&mut self, rule_id: &'static str, points: u32, text: impl Into<String>) {
        self.signals.push(Signal {
            rule_id,
            points,
            text: text.into(),
        });
    }

    pub(crate) fn finish(self) -> CategoryScore {
        let awarded: u32 = self.signals.iter().map(|signal| signal.points).sum();
        CategoryScore {
            score: awarded.min(u32::from(MAX_SCORE)) as Score,
            signals: self.signals,
        }
    }
}

pub fn category_scores(attrs: &ResolvedAttributes) -> [(Category, CategoryScore); 5] {
    [
        (Category::Contact, contact::contact_score(attrs)),
        (Category::Qualification, qualification::qualification_score(attrs)),
        (Category::EnergyData, energy::energy_data_score(attrs)),
        (Category::SystemDesign, design::system_design_score(attrs)),
        (Category::Engagement, engagement::engagement_score(attrs)),
    ]
}

pub fn score_attributes(attrs: &ResolvedAttributes) -> ScoreResult {
    let categories = category_scores(attrs);
    let total_score = composite::composite_score(
        categories
            .iter()
            .map(|(category, score)| (*category, score.score)),
    );
    let tier = tier::classify(total_score);

    let breakdown = categories
        .into_iter()
        .map(|(category, score)| {
            (
                category,
                CategoryBreakdown {
                    category: score,
                    weight: category.weight(),
                },
            )
        })
        .collect();

    ScoreResult {
        total_score,
        tier,
        breakdown,
    }
}

/// Scores one raw lead document. Never fails; missing data scores zero.
pub fn score_lead(record: &Value) -> ScoreResult {
    let attrs = resolve(record);
    let result = score_attributes(&attrs);
    debug!(
        total_score = result.total_score,
        tier = result.tier.label(),
        "scored lead"
    );
    result
}
