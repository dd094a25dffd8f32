use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::core::quiz::{Question, QuizProgress};
use crate::core::render::TrustedHtml;
use crate::models::domain::{BlogPost, Provider};

/// Lead intake acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Quiz results
#[derive(Debug, Clone, Serialize)]
pub struct QuizMatchResponse<'a> {
    pub matches: Vec<&'a Provider>,
    #[serde(rename = "noMatches")]
    pub no_matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub fallback: Vec<&'a Provider>,
    #[serde(rename = "filteredCandidates")]
    pub filtered_candidates: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Wizard state after applying one step
#[derive(Debug, Clone, Serialize)]
pub struct QuizStepResponse {
    pub progress: QuizProgress,
    pub percent: f64,
    #[serde(rename = "nextQuestion")]
    pub next_question: Option<&'static Question>,
}

/// Blog listing entry without the article body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDate,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(rename = "readTime")]
    pub read_time: u32,
    pub featured: bool,
}

impl From<&BlogPost> for BlogSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            published_at: post.published_at,
            category: post.category.clone(),
            tags: post.tags.clone(),
            read_time: post.read_time,
            featured: post.featured,
        }
    }
}

/// Full article with its rendered body
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostResponse<'a> {
    #[serde(flatten)]
    pub post: &'a BlogPost,
    pub html: TrustedHtml,
    pub related: Vec<BlogSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub providers: usize,
    pub persistence: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
