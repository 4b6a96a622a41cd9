use super::Tally;
use crate::resolve::ResolvedAttributes;
use crate::types::scoring::CategoryScore;

/// Usage-data provenance. At most one entry applies per lead.
const SOURCE_POINTS: [(&str, u32, &str); 3] = [
    ("smart_meter_texas", 40, "Smart Meter Texas data"),
    ("utility_bill", 30, "Utility bill data"),
    ("estimated", 15, "Estimated usage"),
];

pub fn energy_data_score(attrs: &ResolvedAttributes) -> CategoryScore {
    let mut tally = Tally::default();

    if let Some((_, points, text)) = SOURCE_POINTS
        .iter()
        .find(|(source, _, _)| *source == attrs.usage_source)
    {
        tally.award("energy.source", *points, *text);
    }
    if attrs.monthly_usage_kwh > 0.0 {
        tally.award(
            "energy.monthly_usage",
            20,
            format!("Monthly usage: {} kWh", attrs.monthly_usage_kwh),
        );
    }
    if attrs.annual_usage_kwh > 0.0 {
        tally.award("energy.annual_usage", 10, "Annual usage known");
    }
    if attrs.history_records > 0 {
        tally.award(
            "energy.history",
            15,
            format!("{} months of usage history", attrs.history_records),
        );
    }
    if !attrs.provider.is_empty() {
        tally.award(
            "energy.provider",
            10,
            format!("Provider: {}", attrs.provider),
        );
    }
    if !attrs.meter_id.is_empty() {
        tally.award("energy.meter_id", 5, "ESIID linked");
    }

    tally.finish()
}
