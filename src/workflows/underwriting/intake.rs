use super::domain::LoanApplication;

/// Validation errors raised while screening an inbound application.
///
/// Field domains mirror the intake form's widget constraints; anything the
/// form could not have produced is rejected here before scoring runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("age {found} outside the accepted 18-100 range")]
    AgeOutOfRange { found: u8 },
    #[error("{field} must be a finite, non-negative amount (found {found})")]
    InvalidAmount { field: &'static str, found: f64 },
    #[error("loan tenure must be at least one month")]
    ZeroTenure,
    #[error("open loan accounts {found} outside the accepted 1-4 range")]
    OpenAccountsOutOfRange { found: u8 },
    #[error("{field} is a percentage and cannot exceed 100 (found {found})")]
    PercentOutOfRange { field: &'static str, found: u8 },
}

const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 100;
const MAX_OPEN_ACCOUNTS: u8 = 4;

/// Screen an inbound application against the declared field domains.
///
/// Zero income or a zero loan amount pass screening; the metrics calculator
/// guards those divisions as a business rule rather than an error.
pub fn screen(application: &LoanApplication) -> Result<(), ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&application.age) {
        return Err(ValidationError::AgeOutOfRange {
            found: application.age,
        });
    }

    screen_amount("income", application.income)?;
    screen_amount("loan_amount", application.loan_amount)?;
    screen_amount(
        "avg_dpd_per_delinquency",
        application.avg_dpd_per_delinquency,
    )?;

    if application.loan_tenure_months == 0 {
        return Err(ValidationError::ZeroTenure);
    }

    if !(1..=MAX_OPEN_ACCOUNTS).contains(&application.num_open_accounts) {
        return Err(ValidationError::OpenAccountsOutOfRange {
            found: application.num_open_accounts,
        });
    }

    screen_percent("delinquency_ratio", application.delinquency_ratio)?;
    screen_percent(
        "credit_utilization_ratio",
        application.credit_utilization_ratio,
    )?;

    Ok(())
}

fn screen_amount(field: &'static str, found: f64) -> Result<(), ValidationError> {
    if found.is_finite() && found >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount { field, found })
    }
}

fn screen_percent(field: &'static str, found: u8) -> Result<(), ValidationError> {
    if found <= 100 {
        Ok(())
    } else {
        Err(ValidationError::PercentOutOfRange { field, found })
    }
}
