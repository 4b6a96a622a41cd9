use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

/// The five scoring dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Contact,
    Qualification,
    EnergyData,
    SystemDesign,
    Engagement,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Contact,
        Category::Qualification,
        Category::EnergyData,
        Category::SystemDesign,
        Category::Engagement,
    ];

    /// Fixed composite weight in percent. The five weights sum to 100.
    pub const fn weight(self) -> u32 {
        match self {
            Category::Contact => 20,
            Category::Qualification => 20,
            Category::EnergyData => 25,
            Category::SystemDesign => 20,
            Category::Engagement => 15,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Contact => "contact",
            Category::Qualification => "qualification",
            Category::EnergyData => "energyData",
            Category::SystemDesign => "systemDesign",
            Category::Engagement => "engagement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Contact => "Contact",
            Category::Qualification => "Qualification",
            Category::EnergyData => "Energy Data",
            Category::SystemDesign => "System Design",
            Category::Engagement => "Engagement",
        }
    }
}

/// One satisfied rule inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub rule_id: &'static str,
    pub points: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub score: Score,
    pub signals: Vec<Signal>,
}

impl CategoryScore {
    /// Sum of awarded points before the category cap is applied.
    pub fn awarded_points(&self) -> u32 {
        self.signals.iter().map(|signal| signal.points).sum()
    }

    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.signals.iter().any(|signal| signal.rule_id == rule_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    #[serde(flatten)]
    pub category: CategoryScore,
    pub weight: u32,
}

/// Ordinal quality band. Declared cold to hot so `Ord` follows temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl Tier {
    /// Hottest first, the order dashboards list them in.
    pub const DESCENDING: [Tier; 4] = [Tier::Hot, Tier::Warm, Tier::Cool, Tier::Cold];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Hot => "Hot",
            Tier::Warm => "Warm",
            Tier::Cool => "Cool",
            Tier::Cold => "Cold",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Hot => "#dc2626",
            Tier::Warm => "#ea580c",
            Tier::Cool => "#2563eb",
            Tier::Cold => "#64748b",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Tier::Hot => "#fef2f2",
            Tier::Warm => "#fff7ed",
            Tier::Cool => "#eff6ff",
            Tier::Cold => "#f8fafc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: Score,
    pub tier: Tier,
    pub breakdown: BTreeMap<Category, CategoryBreakdown>,
}

impl ScoreResult {
    pub fn category_score(&self, category: Category) -> Score {
        self.breakdown
            .get(&category)
            .map(|entry| entry.category.score)
            .unwrap_or(0)
    }
}
