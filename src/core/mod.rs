// Core algorithm exports
pub mod compliance;
pub mod filters;
pub mod matcher;
pub mod pricing;
pub mod quiz;
pub mod render;

pub use compliance::{assess, risk_score, ComplianceAssessment, ComplianceProfile, RiskLevel};
pub use filters::{serves_state, within_budget, offers_study_mode};
pub use matcher::{Matcher, MatchResult, DEFAULT_MATCH_LIMIT};
pub use pricing::{summarize, PricingSummary};
pub use quiz::{QuizProgress, QuizError, Question, QUESTIONS};
pub use render::{render_content, render_line, TrustedHtml};
