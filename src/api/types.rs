// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::strength::{Criterion, StrengthBand, StrengthLabel, StrengthReport};
use crate::models::GenerationConfig;

// Generator-related types
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 6 to 30 (default: configured length)
    pub length: Option<i64>,
    /// Include uppercase letters (default: configured)
    pub include_uppercase: Option<bool>,
    /// Include digits (default: configured)
    pub include_digits: Option<bool>,
    /// Include symbols (default: configured)
    pub include_symbols: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength of the generated password
    pub strength: Option<StrengthReport>,
    /// Settings the password was generated with
    pub config: Option<GenerationConfig>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            config: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to score
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score (0-5)
    pub score: u8,
    pub label: StrengthLabel,
    pub band: StrengthBand,
    /// Criteria the password does not meet
    pub unmet: Vec<Criterion>,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl From<StrengthReport> for PasswordAnalysisResponse {
    fn from(report: StrengthReport) -> Self {
        let feedback = report.feedback();
        PasswordAnalysisResponse {
            success: true,
            score: report.score,
            label: report.label,
            band: report.band,
            unmet: report.unmet,
            feedback,
            error: None,
        }
    }
}
