use super::Tally;
use crate::resolve::ResolvedAttributes;
use crate::types::scoring::CategoryScore;

/// Acquisition channel. At most one entry applies per lead.
const CHANNEL_POINTS: [(&str, u32); 4] = [
    ("referral", 35),
    ("organic", 25),
    ("paid", 20),
    ("direct", 15),
];

pub fn engagement_score(attrs: &ResolvedAttributes) -> CategoryScore {
    let mut tally = Tally::default();

    if let Some((channel, points)) = CHANNEL_POINTS
        .iter()
        .find(|(channel, _)| *channel == attrs.channel)
    {
        tally.award(
            "engagement.channel",
            *points,
            format!("Source: {channel}"),
        );
    }
    if attrs.energy_community_eligible {
        tally.award("engagement.energy_community", 30, "Energy community eligible");
    }
    if !attrs.referral_code.is_empty() {
        tally.award("engagement.referral_code", 15, "Has referral code");
    }
    if !attrs.campaign.is_empty() {
        tally.award(
            "engagement.campaign",
            10,
            format!("Campaign: {}", attrs.campaign),
        );
    }
    if attrs.meter_linked {
        tally.award("engagement.meter_linked", 10, "Smart meter connected");
    }

    tally.finish()
}
