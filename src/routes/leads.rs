use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, LeadRequest, LeadResponse};
use super::AppState;

pub const LEAD_THANKS: &str = "Thank you! We'll be in touch soon.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/leads", web::post().to(capture_lead));
}

/// Lead capture endpoint
///
/// POST /api/leads
///
/// Request body:
/// ```json
/// {
///   "email": "string",
///   "name": "string",
///   "phone": "string",
///   "state": "NSW",
///   "source": "quiz",
///   "provider_interest": "string",
///   "budget": "under-4000",
///   "timeline": "fast",
///   "utm_source": "string",
///   "utm_medium": "string",
///   "utm_campaign": "string"
/// }
/// ```
///
/// The body is parsed here rather than through `web::Json` so that a body
/// that is not JSON is a 500, while a missing email is a 400. Optional
/// fields of the wrong type never reject a lead. A failed insert is logged
/// and the caller still gets a 200.
async fn capture_lead(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let req = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(value) => LeadRequest::from_json(value),
        Err(e) => {
            tracing::error!("Lead capture error: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to process request",
                e.to_string(),
                500,
            ));
        }
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Lead rejected: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Email is required",
            errors.to_string(),
            400,
        ));
    }

    let Some(lead) = req.into_new_lead() else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Email is required",
            "email: Email is required",
            400,
        ));
    };

    let id = match &state.supabase {
        Some(supabase) => match supabase.insert_lead(&lead).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!("Failed to save lead from {}: {}", lead.source, e);
                None
            }
        },
        None => {
            tracing::warn!("No hosted database configured; lead from {} not saved", lead.source);
            None
        }
    };

    tracing::info!(
        "Lead captured: source={}, state={:?}, saved={}",
        lead.source,
        lead.state,
        id.is_some()
    );

    HttpResponse::Ok().json(LeadResponse {
        success: true,
        message: LEAD_THANKS.to_string(),
        id,
    })
}
