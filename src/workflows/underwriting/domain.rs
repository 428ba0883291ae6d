use serde::{Deserialize, Serialize};

/// Raw applicant and loan attributes captured by the intake form.
///
/// Constructed once per submission and passed by value through the scoring
/// pipeline; nothing here is persisted or mutated after intake screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub age: u8,
    pub income: f64,
    pub residence_type: ResidenceType,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
    pub num_open_accounts: u8,
    pub avg_dpd_per_delinquency: f64,
    pub delinquency_ratio: u8,
    pub credit_utilization_ratio: u8,
}

/// Current residence status of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Owned,
    Rented,
    Mortgage,
}

impl ResidenceType {
    pub const fn label(self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Mortgage => "Mortgage",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owned" => Some(Self::Owned),
            "rented" => Some(Self::Rented),
            "mortgage" => Some(Self::Mortgage),
            _ => None,
        }
    }
}

/// Primary purpose declared for the requested loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    Education,
    Home,
    Auto,
    Personal,
}

impl LoanPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Home => "Home",
            LoanPurpose::Auto => "Auto",
            LoanPurpose::Personal => "Personal",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "education" => Some(Self::Education),
            "home" => Some(Self::Home),
            "auto" => Some(Self::Auto),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }
}

/// Whether the loan is backed by collateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Unsecured,
    Secured,
}

impl LoanType {
    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Unsecured => "Unsecured",
            LoanType::Secured => "Secured",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unsecured" => Some(Self::Unsecured),
            "secured" => Some(Self::Secured),
            _ => None,
        }
    }
}
