use crate::types::scoring::{Category, Score, MAX_SCORE};

/// Weighted blend of the category scores, rounded half-up.
///
/// Works in integer hundredths so `x.5` always rounds up.
pub fn composite_score(scores: impl IntoIterator<Item = (Category, Score)>) -> Score {
    let weighted: u32 = scores
        .into_iter()
        .map(|(category, score)| u32::from(score) * category.weight())
        .sum();
    let rounded = (weighted + 50) / 100;
    rounded.min(u32::from(MAX_SCORE)) as Score
}
