use super::Tally;
use crate::resolve::ResolvedAttributes;
use crate::types::scoring::CategoryScore;

const CREDIT_POINTS: [(&str, u32); 4] = [
    ("excellent", 35),
    ("good", 25),
    ("fair", 15),
    ("poor", 5),
];
/// Credit tier was supplied but is not one of the known labels.
const UNRATED_CREDIT_POINTS: u32 = 10;

pub fn qualification_score(attrs: &ResolvedAttributes) -> CategoryScore {
    let mut tally = Tally::default();

    if attrs.is_homeowner {
        tally.award("qualification.homeowner", 40, "Homeowner");
    }
    if !attrs.credit_tier.is_empty() {
        let points = CREDIT_POINTS
            .iter()
            .find(|(tier, _)| *tier == attrs.credit_tier)
            .map(|(_, points)| *points)
            .unwrap_or(UNRATED_CREDIT_POINTS);
        tally.award(
            "qualification.credit",
            points,
            format!("Credit: {}", attrs.credit_tier),
        );
    }
    if attrs.bill_proof_flag || !attrs.bill_proof_url.is_empty() {
        tally.award("qualification.bill_proof", 25, "Bill uploaded");
    }

    tally.finish()
}
