use crate::models::{NewLead, NewQuizSubmission};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names in the hosted database
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub leads: String,
    pub quiz_submissions: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            leads: "leads".to_string(),
            quiz_submissions: "quiz_submissions".to_string(),
        }
    }
}

/// Supabase REST client
///
/// Inserts rows through the PostgREST interface:
/// - Lead capture
/// - Completed quiz submissions
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    async fn insert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        prefer: &str,
    ) -> Result<reqwest::Response, SupabaseError> {
        let url = self.table_url(table);

        tracing::debug!("Inserting into {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", prefer)
            .json(row)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(SupabaseError::ApiError(format!(
                "Insert into {} failed: {} - {}",
                table, status, body
            )));
        }

        Ok(response)
    }

    /// Insert a lead and return the id of the created row
    pub async fn insert_lead(&self, lead: &NewLead) -> Result<String, SupabaseError> {
        let response = self
            .insert(&self.tables.leads, lead, "return=representation")
            .await?;

        let json: Value = response.json().await?;

        // PostgREST returns the inserted rows as an array
        let row = match &json {
            Value::Array(rows) => rows.first(),
            other => Some(other),
        }
        .ok_or_else(|| SupabaseError::InvalidResponse("Empty insert response".into()))?;

        let id = match row.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(SupabaseError::InvalidResponse(
                    "Inserted lead has no id".into(),
                ))
            }
        };

        tracing::debug!("Inserted lead {} from {}", id, lead.source);

        Ok(id)
    }

    /// Record a completed quiz
    pub async fn record_quiz_submission(
        &self,
        submission: &NewQuizSubmission,
    ) -> Result<(), SupabaseError> {
        self.insert(&self.tables.quiz_submissions, submission, "return=minimal")
            .await?;

        tracing::debug!(
            "Recorded quiz submission with {} recommendations",
            submission.recommended_providers.len()
        );

        Ok(())
    }
}
