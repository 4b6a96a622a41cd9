//! Alias table for every canonical lead attribute.
//!
//! Each list is tried front to back; the first extractor yielding a usable
//! value wins.

pub(crate) type FieldPath = &'static [&'static str];

#[derive(Debug, Clone, Copy)]
pub(crate) enum Extractor {
    At(FieldPath),
    /// Two text fields joined by a single space, e.g. first and last name.
    Joined(FieldPath, FieldPath),
}

use Extractor::{At, Joined};

/// Keys callers use to wrap the real payload.
pub(crate) const ENVELOPE_KEYS: [&str; 2] = ["lead", "data"];

pub(crate) const NAME: &[Extractor] = &[
    At(&["name"]),
    At(&["customerName"]),
    Joined(&["customer", "firstName"], &["customer", "lastName"]),
    At(&["customer", "name"]),
    Joined(&["firstName"], &["lastName"]),
];

pub(crate) const EMAIL: &[Extractor] = &[
    At(&["email"]),
    At(&["customer", "email"]),
    At(&["contactInfo", "email"]),
];

pub(crate) const PHONE: &[Extractor] = &[
    At(&["phone"]),
    At(&["customer", "phone"]),
    At(&["contactInfo", "phone"]),
];

pub(crate) const HOMEOWNER: &[Extractor] = &[
    At(&["qualification", "isHomeowner"]),
    At(&["isHomeowner"]),
];

pub(crate) const CREDIT_TIER: &[Extractor] = &[
    At(&["qualification", "creditScore"]),
    At(&["creditScore"]),
];

pub(crate) const BILL_PROOF_FLAG: &[Extractor] = &[
    At(&["qualification", "hasBillProof"]),
    At(&["hasBillProof"]),
];

pub(crate) const BILL_PROOF_URL: &[Extractor] = &[
    At(&["qualification", "billProofUrl"]),
    At(&["billData", "billProofUrl"]),
    At(&["billProofUrl"]),
];

pub(crate) const USAGE_SOURCE: &[Extractor] = &[
    At(&["billData", "source"]),
    At(&["billData", "dataSource"]),
    At(&["usageDataSource"]),
];

pub(crate) const MONTHLY_USAGE: &[Extractor] = &[
    At(&["billData", "monthlyUsageKwh"]),
    At(&["billData", "monthlyKwh"]),
    At(&["monthlyUsageKwh"]),
];

pub(crate) const ANNUAL_USAGE: &[Extractor] = &[
    At(&["billData", "annualUsageKwh"]),
    At(&["billData", "annualKwh"]),
    At(&["smartMeterTexas", "annualKwh"]),
    At(&["annualUsageKwh"]),
];

pub(crate) const USAGE_HISTORY: &[Extractor] = &[
    At(&["billData", "usageHistory"]),
    At(&["billData", "monthlyUsage"]),
    At(&["smartMeterTexas", "monthlyUsage"]),
    At(&["usageHistory"]),
];

pub(crate) const PROVIDER: &[Extractor] = &[
    At(&["billData", "provider"]),
    At(&["billData", "utilityProvider"]),
    At(&["utilityProvider"]),
];

pub(crate) const METER_ID: &[Extractor] = &[
    At(&["billData", "esiid"]),
    At(&["smartMeterTexas", "esiid"]),
    At(&["billData", "meterId"]),
    At(&["esiid"]),
];

pub(crate) const RECOMMENDED_PANELS: &[Extractor] = &[
    At(&["systemDesign", "recommendedPanelCount"]),
    At(&["systemDesign", "panelCount"]),
];

pub(crate) const MAX_PANELS: &[Extractor] = &[
    At(&["systemDesign", "maxPanels"]),
    At(&["systemDesign", "maxPanelCapacity"]),
];

pub(crate) const SYSTEM_SIZE_KW: &[Extractor] = &[
    At(&["systemDesign", "systemSizeKw"]),
    At(&["systemSizeKw"]),
];

pub(crate) const ANNUAL_PRODUCTION: &[Extractor] = &[
    At(&["systemDesign", "annualProductionKwh"]),
    At(&["systemDesign", "yearlyProductionKwh"]),
];

pub(crate) const ESTIMATED_COST: &[Extractor] = &[
    At(&["systemDesign", "estimatedCost"]),
    At(&["systemDesign", "totalCost"]),
];

pub(crate) const ANNUAL_SAVINGS: &[Extractor] = &[
    At(&["systemDesign", "estimatedAnnualSavings"]),
    At(&["systemDesign", "annualSavings"]),
];

pub(crate) const PAYBACK_YEARS: &[Extractor] = &[
    At(&["systemDesign", "paybackYears"]),
    At(&["systemDesign", "paybackPeriod"]),
];

pub(crate) const CHANNEL: &[Extractor] = &[
    At(&["tracking", "source"]),
    At(&["leadSource"]),
    At(&["source"]),
];

pub(crate) const ENERGY_COMMUNITY: &[Extractor] = &[
    At(&["energyCommunity", "eligible"]),
    At(&["energyCommunity", "isEligible"]),
    At(&["isEnergyCommunity"]),
];

pub(crate) const REFERRAL_CODE: &[Extractor] = &[
    At(&["tracking", "referralCode"]),
    At(&["referralCode"]),
];

pub(crate) const CAMPAIGN: &[Extractor] = &[
    At(&["tracking", "campaign"]),
    At(&["tracking", "utmCampaign"]),
    At(&["campaign"]),
];

pub(crate) const METER_LINKED: &[Extractor] = &[
    At(&["smartMeterTexas", "linked"]),
    At(&["smartMeterTexas", "connected"]),
    At(&["smtConnected"]),
];
