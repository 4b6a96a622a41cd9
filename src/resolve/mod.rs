//! Normalizes heterogeneous lead documents into one canonical attribute view.
//!
//! Nothing in here fails: absent or wrong-typed fields resolve to an empty
//! string, `0.0`, `0` or `false`.

mod read;
mod table;

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAttributes {
    pub name: String,
    pub email: String,
    pub phone: String,

    pub is_homeowner: bool,
    pub credit_tier: String,
    pub bill_proof_flag: bool,
    pub bill_proof_url: String,

    pub usage_source: String,
    pub monthly_usage_kwh: f64,
    pub annual_usage_kwh: f64,
    pub history_records: usize,
    pub provider: String,
    pub meter_id: String,

    pub recommended_panels: f64,
    pub max_panels: f64,
    pub system_size_kw: f64,
    pub annual_production_kwh: f64,
    pub estimated_cost: f64,
    pub annual_savings: f64,
    pub payback_years: f64,

    pub channel: String,
    pub energy_community_eligible: bool,
    pub referral_code: String,
    pub campaign: String,
    pub meter_linked: bool,
}

/// Envelope layers of a record, innermost payload first and the record
/// itself last. Wrappers are `{"lead": {...}}` and `{"data": {...}}`.
pub fn layers(record: &Value) -> Vec<&Value> {
    let mut layers = vec![record];
    let mut current = record;
    while let Some(inner) = table::ENVELOPE_KEYS
        .iter()
        .find_map(|key| current.get(*key).filter(|value| value.is_object()))
    {
        layers.push(inner);
        current = inner;
    }
    layers.reverse();
    layers
}

/// The innermost envelope payload.
pub fn payload(record: &Value) -> &Value {
    layers(record).first().copied().unwrap_or(record)
}

/// Resolves every attribute from the innermost payload, falling back to
/// enclosing layers for attributes the payload lacks.
pub fn resolve(record: &Value) -> ResolvedAttributes {
    let chain = layers(record);
    let chain = chain.as_slice();

    ResolvedAttributes {
        name: read::text(chain, table::NAME),
        email: read::text(chain, table::EMAIL),
        phone: read::text(chain, table::PHONE),

        is_homeowner: read::flag(chain, table::HOMEOWNER),
        credit_tier: read::text(chain, table::CREDIT_TIER).to_ascii_lowercase(),
        bill_proof_flag: read::flag(chain, table::BILL_PROOF_FLAG),
        bill_proof_url: read::text(chain, table::BILL_PROOF_URL),

        usage_source: read::text(chain, table::USAGE_SOURCE).to_ascii_lowercase(),
        monthly_usage_kwh: read::number(chain, table::MONTHLY_USAGE),
        annual_usage_kwh: read::number(chain, table::ANNUAL_USAGE),
        history_records: read::count(chain, table::USAGE_HISTORY),
        provider: read::text(chain, table::PROVIDER),
        meter_id: read::text(chain, table::METER_ID),

        recommended_panels: read::number(chain, table::RECOMMENDED_PANELS),
        max_panels: read::number(chain, table::MAX_PANELS),
        system_size_kw: read::number(chain, table::SYSTEM_SIZE_KW),
        annual_production_kwh: read::number(chain, table::ANNUAL_PRODUCTION),
        estimated_cost: read::number(chain, table::ESTIMATED_COST),
        annual_savings: read::number(chain, table::ANNUAL_SAVINGS),
        payback_years: read::number(chain, table::PAYBACK_YEARS),

        channel: read::text(chain, table::CHANNEL).to_ascii_lowercase(),
        energy_community_eligible: read::flag(chain, table::ENERGY_COMMUNITY),
        referral_code: read::text(chain, table::REFERRAL_CODE),
        campaign: read::text(chain, table::CAMPAIGN),
        meter_linked: read::flag(chain, table::METER_LINKED),
    }
}
