//! RTO Compare - backend for the independent FNS50322 provider comparison site
//!
//! This library provides the provider-matching quiz, the blog content renderer,
//! the static content store and the lead intake endpoint.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, QuizProgress, render_content, TrustedHtml};
pub use crate::models::{Provider, QuizAnswers, BlogPost, LeadRequest, LeadResponse};
pub use crate::services::{ContentStore, SupabaseClient};
