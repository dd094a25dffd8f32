use actix_web::{web, HttpResponse, Responder};
use crate::core::QUESTIONS;
use crate::models::{
    ErrorResponse, NewQuizSubmission, QuizMatchRequest, QuizMatchResponse, QuizStepRequest,
    QuizStepResponse, StepAction,
};
use super::AppState;

pub const NO_MATCHES_MESSAGE: &str =
    "No providers matched all of your answers. Here are our top-rated providers instead.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/quiz/questions", web::get().to(get_questions))
        .route("/quiz/step", web::post().to(quiz_step))
        .route("/quiz/matches", web::post().to(find_matches));
}

/// GET /api/quiz/questions
async fn get_questions() -> impl Responder {
    HttpResponse::Ok().json(&QUESTIONS)
}

/// Apply one wizard action
///
/// POST /api/quiz/step
///
/// Request body:
/// ```json
/// {
///   "progress": { "step": 0, "answers": {}, "complete": false },
///   "action": { "answer": "under-4000" }
/// }
/// ```
/// `action` may also be the string `"back"`.
async fn quiz_step(req: web::Json<QuizStepRequest>) -> impl Responder {
    let QuizStepRequest { mut progress, action } = req.into_inner();

    let applied = match action {
        StepAction::Answer(value) => progress.answer(&value),
        StepAction::Back => progress.back(),
    };

    if let Err(e) = applied {
        tracing::info!("Rejected quiz step at step {}: {}", progress.step, e);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Invalid quiz step",
            e.to_string(),
            400,
        ));
    }

    let next_question = progress.current_question();
    let percent = progress.percent();

    HttpResponse::Ok().json(QuizStepResponse {
        progress,
        percent,
        next_question,
    })
}

/// Find matching providers
///
/// POST /api/quiz/matches
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "budget": "under-4000",
///     "timeline": "fast",
///     "studyMode": "online",
///     "state": "NSW",
///     "experience": "none"
///   },
///   "email": "string",
///   "sessionId": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<QuizMatchRequest>,
) -> impl Responder {
    let providers = state.content.providers();
    let result = state.matcher.find_matches(providers, &req.answers);

    let no_matches = result.is_empty();
    let fallback = if no_matches {
        tracing::info!("Quiz answers {:?} matched no providers, using fallback", req.answers);
        state.matcher.top_rated(providers)
    } else {
        Vec::new()
    };

    if let Some(supabase) = &state.supabase {
        let submission = NewQuizSubmission {
            answers: req.answers.clone(),
            recommended_providers: result.matches.iter().map(|p| p.slug.clone()).collect(),
            completed: true,
            email: req.email.clone(),
            session_id: req.session_id.clone(),
        };

        // Best-effort, for funnel analytics
        if let Err(e) = supabase.record_quiz_submission(&submission).await {
            tracing::warn!("Failed to record quiz submission: {}", e);
        }
    }

    tracing::info!(
        "Returning {} matches (from {} filtered, {} total)",
        result.matches.len(),
        result.filtered_candidates,
        result.total_candidates
    );

    HttpResponse::Ok().json(QuizMatchResponse {
        matches: result.matches,
        no_matches,
        message: no_matches.then(|| NO_MATCHES_MESSAGE.to_string()),
        fallback,
        filtered_candidates: result.filtered_candidates,
        total_candidates: result.total_candidates,
    })
}
