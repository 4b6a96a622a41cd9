use super::Tally;
use crate::resolve::ResolvedAttributes;
use crate::types::scoring::CategoryScore;

/// Paybacks at or beyond this many years are not rewarded.
const MAX_PAYBACK_YEARS: f64 = 25.0;

pub fn system_design_score(attrs: &ResolvedAttributes) -> CategoryScore {
    let mut tally = Tally::default();

    if attrs.recommended_panels > 0.0 || attrs.max_panels > 0.0 {
        let panels = if attrs.recommended_panels > 0.0 {
            attrs.recommended_panels
        } else {
            attrs.max_panels
        };
        tally.award("design.panels", 25, format!("{panels} panels designed"));
    }
    if attrs.system_size_kw > 0.0 {
        tally.award(
            "design.system_size",
            20,
            format!("{} kW system", attrs.system_size_kw),
        );
    }
    if attrs.annual_production_kwh > 0.0 {
        tally.award("design.production", 15, "Production estimated");
    }
    if attrs.estimated_cost > 0.0 {
        tally.award("design.cost", 15, "Cost estimated");
    }
    if attrs.annual_savings > 0.0 {
        tally.award("design.savings", 15, "Savings estimated");
    }
    if attrs.payback_years > 0.0 && attrs.payback_years < MAX_PAYBACK_YEARS {
        tally.award(
            "design.payback",
            10,
            format!("{} year payback", attrs.payback_years),
        );
    }

    tally.finish()
}
