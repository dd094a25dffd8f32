use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;
use crate::core::quiz::QuizProgress;
use crate::models::quiz::QuizAnswers;
use crate::models::records::{LeadStatus, NewLead, DEFAULT_LEAD_SOURCE};

/// Lead capture form submission
///
/// Only `email` is required, and only a JSON string counts as one. The other
/// fields are read leniently: numbers and booleans are kept as text, anything
/// else is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LeadRequest {
    #[validate(required(message = "Email is required"), length(min = 1, message = "Email is required"))]
    #[serde(default, deserialize_with = "string_only")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub provider_interest: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub timeline: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub utm_source: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub utm_medium: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub utm_campaign: Option<String>,
}

fn string_only<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

impl LeadRequest {
    /// Read a lead from any JSON document. Bodies that are not objects carry
    /// no email and fail validation.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Convert into an insertable row. Returns `None` when no email is present.
    pub fn into_new_lead(self) -> Option<NewLead> {
        let email = self.email.filter(|e| !e.is_empty())?;
        Some(NewLead {
            email,
            source: self.source.unwrap_or_else(|| DEFAULT_LEAD_SOURCE.to_string()),
            status: LeadStatus::New,
            name: self.name,
            phone: self.phone,
            state: self.state,
            provider_interest: self.provider_interest,
            budget: self.budget,
            timeline: self.timeline,
            utm_source: self.utm_source,
            utm_medium: self.utm_medium,
            utm_campaign: self.utm_campaign,
        })
    }
}

/// Request to compute quiz matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizMatchRequest {
    #[serde(default)]
    pub answers: QuizAnswers,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}

/// One wizard action applied to a client-held progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Answer(String),
    Back,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStepRequest {
    #[serde(default)]
    pub progress: QuizProgress,
    pub action: StepAction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderQuery {
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleQuery {
    pub category: Option<crate::models::domain::ModuleCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email_fails_validation() {
        let req: LeadRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());

        let req: LeadRequest = serde_json::from_str(r#"{"email":""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_lead_defaults_source() {
        let req: LeadRequest =
            serde_json::from_str(r#"{"email":"a@b.com","utm_campaign":"spring"}"#).unwrap();
        assert!(req.validate().is_ok());

        let lead = req.into_new_lead().unwrap();
        assert_eq!(lead.source, "website");
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.utm_campaign.as_deref(), Some("spring"));
    }

    #[test]
    fn test_lead_fields_read_leniently() {
        let req = LeadRequest::from_json(serde_json::json!({
            "email": "a@b.com",
            "phone": 412345678,
            "budget": 4500.5,
            "name": { "first": "Sam" },
            "utm_source": true
        }));

        assert!(req.validate().is_ok());
        assert_eq!(req.phone.as_deref(), Some("412345678"));
        assert_eq!(req.budget.as_deref(), Some("4500.5"));
        assert_eq!(req.utm_source.as_deref(), Some("true"));
        assert!(req.name.is_none());
    }

    #[test]
    fn test_non_string_email_fails_validation() {
        for value in [
            serde_json::json!({ "email": 42 }),
            serde_json::json!({ "email": ["a@b.com"] }),
            serde_json::json!(["a@b.com"]),
            serde_json::json!("a@b.com"),
        ] {
            assert!(LeadRequest::from_json(value).validate().is_err());
        }
    }

    #[test]
    fn test_step_action_shapes() {
        let action: StepAction = serde_json::from_str(r#"{"answer":"online"}"#).unwrap();
        assert!(matches!(action, StepAction::Answer(v) if v == "online"));

        let action: StepAction = serde_json::from_str(r#""back""#).unwrap();
        assert!(matches!(action, StepAction::Back));
    }
}
