//! Static display lookup tables mapping priority and risk tiers to accent
//! colors. Pure presentation metadata; clients decide what an accent means
//! visually.

use serde::Serialize;

use crate::models::analysis::{GapPriority, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Orange,
    Yellow,
    Blue,
    Emerald,
}

pub const fn priority_accent(priority: GapPriority) -> Accent {
    match priority {
        GapPriority::Critical => Accent::Red,
        GapPriority::High => Accent::Orange,
        GapPriority::Medium => Accent::Yellow,
        GapPriority::Low => Accent::Blue,
    }
}

pub const fn risk_accent(risk: RiskLevel) -> Accent {
    match risk {
        RiskLevel::High => Accent::Red,
        RiskLevel::Medium => Accent::Yellow,
        RiskLevel::Low => Accent::Emerald,
    }
}
