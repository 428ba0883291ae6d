use serde::{Deserialize, Serialize};

/// Probability bands are first-match-wins; the score band is independent and
/// appended afterwards. All comparisons are strictly greater/less-than.
pub const HIGH_RISK_PROBABILITY: f64 = 0.3;
pub const MODERATE_RISK_PROBABILITY: f64 = 0.1;
pub const IMPROVEMENT_SCORE_CEILING: u16 = 600;
pub const PREMIUM_SCORE_FLOOR: u16 = 750;

/// Advisory outcome, kept separate from its rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    ReduceExposure,
    StrengthenCollateral,
    CompetitiveRates,
    RebuildCreditHabits,
    PremiumProducts,
}

impl Recommendation {
    pub const fn message(self) -> &'static str {
        match self {
            Recommendation::ReduceExposure => {
                "High default risk detected. Consider reducing loan amount or improving credit profile."
            }
            Recommendation::StrengthenCollateral => {
                "Moderate risk. Consider additional documentation or collateral."
            }
            Recommendation::CompetitiveRates => {
                "Low risk profile. Eligible for competitive rates."
            }
            Recommendation::RebuildCreditHabits => {
                "Focus on improving payment history and reducing credit utilization."
            }
            Recommendation::PremiumProducts => {
                "Excellent credit score! Eligible for premium loan products."
            }
        }
    }
}

/// Map the model output to an ordered advisory list of one or two entries.
pub fn generate_recommendations(probability: f64, credit_score: u16) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(2);

    if probability > HIGH_RISK_PROBABILITY {
        recommendations.push(Recommendation::ReduceExposure);
    } else if probability > MODERATE_RISK_PROBABILITY {
        recommendations.push(Recommendation::StrengthenCollateral);
    } else {
        recommendations.push(Recommendation::CompetitiveRates);
    }

    if credit_score < IMPROVEMENT_SCORE_CEILING {
        recommendations.push(Recommendation::RebuildCreditHabits);
    } else if credit_score > PREMIUM_SCORE_FLOOR {
        recommendations.push(Recommendation::PremiumProducts);
    }

    recommendations
}
