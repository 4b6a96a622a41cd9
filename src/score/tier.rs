use crate::types::scoring::{Score, Tier};

/// Lower bounds, hottest first. Anything below the last floor is cold.
const TIER_FLOORS: [(Score, Tier); 3] = [(80, Tier::Hot), (60, Tier::Warm), (40, Tier::Cool)];

pub fn classify(total_score: Score) -> Tier {
    TIER_FLOORS
        .iter()
        .find(|(floor, _)| total_score >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Cold)
}
