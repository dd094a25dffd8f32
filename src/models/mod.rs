// Model exports
pub mod domain;
pub mod quiz;
pub mod records;
pub mod requests;
pub mod responses;

pub use domain::{Provider, PricingOption, DeliveryMode, MembershipPathway, BlogPost, FaqItem, FaqCategory, CourseModule, ModuleCategory};
pub use quiz::{QuizAnswers, QuestionId, BudgetAnswer, TimelineAnswer, StudyModeAnswer, StateAnswer, ExperienceAnswer};
pub use records::{NewLead, NewQuizSubmission, LeadStatus};
pub use requests::{LeadRequest, QuizMatchRequest, QuizStepRequest, StepAction};
pub use responses::{LeadResponse, QuizMatchResponse, QuizStepResponse, BlogSummary, BlogPostResponse, HealthResponse, ErrorResponse};
