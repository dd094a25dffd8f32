//! Registration risk scoring for training organisations.

use serde::{Deserialize, Serialize};
use crate::models::Provider;

const NEW_PROVIDER_YEARS: f64 = 2.0;
const LOW_COMPLETION_RATE: f64 = 70.0;

const NEW_PROVIDER_POINTS: u32 = 2;
const CONDITIONS_POINTS: u32 = 3;
const LOW_COMPLETION_POINTS: u32 = 2;
const NOT_VET_APPROVED_POINTS: u32 = 1;

pub const MEDIUM_RISK_SCORE: u32 = 2;
pub const HIGH_RISK_SCORE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_SCORE {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// What is known about an organisation's registration.
///
/// Unknown numbers are `None`, and a zero is treated the same as unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceProfile {
    #[serde(default)]
    pub years_operating: Option<f64>,
    #[serde(default)]
    pub has_conditions: bool,
    #[serde(default)]
    pub completion_rate: Option<f64>,
    #[serde(default)]
    pub vet_approved: bool,
}

impl ComplianceProfile {
    /// Profile of a catalog provider as of `current_year`
    pub fn for_provider(provider: &Provider, current_year: i32) -> Self {
        Self {
            years_operating: provider
                .founded_year()
                .map(|founded| f64::from(current_year - founded)),
            has_conditions: !provider.registration_conditions.is_empty(),
            completion_rate: Some(provider.completion_rate),
            vet_approved: provider.offers_vet_student_loan(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceAssessment {
    pub score: u32,
    pub level: RiskLevel,
}

#[inline]
fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

pub fn risk_score(profile: &ComplianceProfile) -> u32 {
    let mut score = 0;

    if known(profile.years_operating).is_some_and(|y| y < NEW_PROVIDER_YEARS) {
        score += NEW_PROVIDER_POINTS;
    }
    if profile.has_conditions {
        score += CONDITIONS_POINTS;
    }
    if known(profile.completion_rate).is_some_and(|r| r < LOW_COMPLETION_RATE) {
        score += LOW_COMPLETION_POINTS;
    }
    if !profile.vet_approved {
        score += NOT_VET_APPROVED_POINTS;
    }

    score
}

pub fn assess(profile: &ComplianceProfile) -> ComplianceAssessment {
    let score = risk_score(profile);
    ComplianceAssessment {
        score,
        level: RiskLevel::from_score(score),
    }
}
