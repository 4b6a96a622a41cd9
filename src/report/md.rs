use crate::resolve::resolve;
use crate::types::report::{AggregateReport, ScoredLead};
use crate::types::scoring::{Category, ScoreResult, Tier};

pub fn lead_to_markdown(result: &ScoreResult, show_signals: bool) -> String {
    let mut output = String::new();
    output.push_str("# Lead Score\n\n");
    output.push_str(&format!(
        "Total score: {} ({})\n\n",
        result.total_score,
        result.tier.label()
    ));

    output.push_str("## Categories\n\n");
    output.push_str("| Category | Score | Weight |\n|---|---:|---:|\n");
    for (category, entry) in &result.breakdown {
        output.push_str(&format!(
            "| {} | {} | {}% |\n",
            category.label(),
            entry.category.score,
            entry.weight
        ));
    }
    output.push('\n');

    if show_signals {
        output.push_str("## Signals\n\n");
        let signals = result
            .breakdown
            .iter()
            .flat_map(|(category, entry)| {
                entry
                    .category
                    .signals
                    .iter()
                    .map(move |signal| (category, signal))
            })
            .collect::<Vec<_>>();
        if signals.is_empty() {
            output.push_str("- none\n");
        } else {
            for (category, signal) in signals {
                output.push_str(&format!(
                    "- [{}] {} (+{})\n",
                    category.label(),
                    signal.text,
                    signal.points
                ));
            }
        }
    }

    output
}

fn lead_name(lead: &ScoredLead) -> String {
    let name = resolve(&lead.lead).name;
    if name.is_empty() {
        "(unnamed)".to_string()
    } else {
        name
    }
}

fn push_ranking(output: &mut String, title: &str, leads: &[ScoredLead]) {
    output.push_str(&format!("## {title}\n\n"));
    if leads.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    output.push_str("| # | Lead | Score | Tier |\n|---:|---|---:|---|\n");
    for (rank, lead) in leads.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rank + 1,
            lead_name(lead),
            lead.total_score(),
            lead.scoring.tier.label()
        ));
    }
    output.push('\n');
}

pub fn report_to_markdown(report: &AggregateReport) -> String {
    let mut output = String::new();
    output.push_str("# Lead Score Report\n\n");
    output.push_str(&format!(
        "Leads scored: {}\nAverage score: {}\n\n",
        report.total, report.avg_score
    ));

    output.push_str("## Tier Distribution\n\n");
    for tier in Tier::DESCENDING {
        output.push_str(&format!(
            "- {}: {}\n",
            tier.label(),
            report.distribution.get(&tier).copied().unwrap_or(0)
        ));
    }
    output.push('\n');

    output.push_str("## Score Histogram\n\n");
    for bucket in &report.histogram {
        output.push_str(&format!("- {}: {}\n", bucket.label, bucket.count));
    }
    output.push('\n');

    output.push_str("## Category Averages\n\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "- {}: {}\n",
            category.label(),
            report.category_averages.get(&category).copied().unwrap_or(0)
        ));
    }
    output.push('\n');

    push_ranking(&mut output, "Top Leads", &report.top_leads);
    push_ranking(&mut output, "Bottom Leads", &report.bottom_leads);

    output
}
