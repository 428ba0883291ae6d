use serde::{Deserialize, Serialize};

/// Thresholds for the heuristic indicators. All comparisons are strictly
/// greater-than; a value sitting exactly on a threshold does not flag.
pub const LOAN_TO_INCOME_LIMIT: f64 = 3.0;
pub const DELINQUENCY_LIMIT: u8 = 20;
pub const UTILIZATION_LIMIT: u8 = 70;

/// One triggered heuristic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactor {
    LoanToIncome,
    Delinquency,
    CreditUtilization,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            RiskFactor::LoanToIncome => "High loan-to-income ratio",
            RiskFactor::Delinquency => "High delinquency ratio",
            RiskFactor::CreditUtilization => "High credit utilization",
        }
    }
}

/// Qualitative band derived solely from the indicator count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Indicator count and the rules behind it, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlags {
    pub score: u8,
    pub factors: Vec<RiskFactor>,
}

impl RiskFlags {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }

    /// Flattened view with display labels for API payloads and the CLI.
    pub fn summary(&self) -> RiskSummaryView {
        RiskSummaryView {
            score: self.score,
            level: self.level(),
            level_label: self.level().label(),
            factors: self.factors.iter().map(|factor| factor.label()).collect(),
        }
    }
}

/// Presentation-free labels for a flag set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummaryView {
    pub score: u8,
    pub level: RiskLevel,
    pub level_label: &'static str,
    pub factors: Vec<&'static str>,
}

/// Apply the three independent threshold rules in fixed order.
///
/// Each rule contributes at most one point, so the score is always the
/// factor count and lands in `0..=3`.
pub fn flag_risk(
    loan_to_income_ratio: f64,
    delinquency_ratio: u8,
    credit_utilization_ratio: u8,
) -> RiskFlags {
    let mut factors = Vec::new();

    if loan_to_income_ratio > LOAN_TO_INCOME_LIMIT {
        factors.push(RiskFactor::LoanToIncome);
    }
    if delinquency_ratio > DELINQUENCY_LIMIT {
        factors.push(RiskFactor::Delinquency);
    }
    if credit_utilization_ratio > UTILIZATION_LIMIT {
        factors.push(RiskFactor::CreditUtilization);
    }

    RiskFlags {
        score: factors.len() as u8,
        factors,
    }
}
