// HTTP API tests using the actix test harness and a mock Supabase

use actix_web::{test, web, App};
use rto_compare::core::Matcher;
use rto_compare::routes::{self, AppState};
use rto_compare::services::{ContentStore, SupabaseClient, SupabaseTables};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn shipped_content() -> Arc<ContentStore> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    Arc::new(ContentStore::load(dir).unwrap())
}

fn create_state(supabase_url: Option<String>) -> AppState {
    let supabase = supabase_url.map(|url| {
        Arc::new(
            SupabaseClient::new(
                url,
                "service_key".to_string(),
                SupabaseTables::default(),
                Duration::from_secs(5),
            )
            .unwrap(),
        )
    });

    AppState {
        content: shipped_content(),
        supabase,
        matcher: Matcher::default(),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(routes::json_config())
                .app_data(routes::query_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_lead_minimal_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/leads")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"lead-1","email":"a@b.com"}]"#)
        .create_async()
        .await;

    let app = init_app!(create_state(Some(server.url())));

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], "lead-1");
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_lead_missing_email_is_400() {
    let app = init_app!(create_state(None));

    for payload in [json!({}), json!({ "name": "Sam" }), json!({ "email": "" }), json!({ "email": null })] {
        let req = test::TestRequest::post()
            .uri("/api/leads")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("Email"));
    }
}

#[actix_web::test]
async fn test_lead_persistence_failure_still_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/leads")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let app = init_app!(create_state(Some(server.url())));

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({ "email": "a@b.com", "state": "NSW", "source": "quiz" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("id").is_none());
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_lead_without_store_succeeds() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("id").is_none());
}

#[actix_web::test]
async fn test_lead_with_numeric_fields_is_saved() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/leads")
        .match_body(mockito::Matcher::PartialJson(json!({
            "email": "a@b.com",
            "phone": "412345678"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":7}]"#)
        .create_async()
        .await;

    let app = init_app!(create_state(Some(server.url())));

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({ "email": "a@b.com", "phone": 412345678 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], "7");
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_lead_non_object_body_is_400() {
    let app = init_app!(create_state(None));

    for payload in [json!(["a@b.com"]), json!({ "email": 42 })] {
        let req = test::TestRequest::post()
            .uri("/api/leads")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}

#[actix_web::test]
async fn test_lead_unparseable_body_is_500() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to process request");
}

#[actix_web::test]
async fn test_quiz_matches() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/quiz/matches")
        .set_json(json!({
            "answers": {
                "budget": "under-4000",
                "timeline": "fast",
                "studyMode": "online",
                "state": "NSW",
                "experience": "none"
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let slugs: Vec<&str> = body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();

    assert_eq!(
        slugs,
        vec!["harbour-finance-academy", "lendright-training", "national-broker-pathways"]
    );
    assert_eq!(body["noMatches"], false);
    assert!(body["fallback"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_quiz_no_matches_returns_fallback() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/quiz_submissions")
        .match_body(mockito::Matcher::PartialJson(json!({
            "recommended_providers": [],
            "completed": true,
            "session_id": "s-1"
        })))
        .with_status(201)
        .create_async()
        .await;

    let app = init_app!(create_state(Some(server.url())));

    // The WA providers under $4,000 are online only
    let req = test::TestRequest::post()
        .uri("/api/quiz/matches")
        .set_json(json!({
            "answers": { "budget": "under-4000", "studyMode": "face-to-face", "state": "WA" },
            "sessionId": "s-1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["matches"].as_array().unwrap().is_empty());
    assert_eq!(body["noMatches"], true);
    assert!(body["message"].is_string());

    let fallback = body["fallback"].as_array().unwrap();
    assert_eq!(fallback.len(), 3);
    assert_eq!(fallback[0]["slug"], "harbour-finance-academy");
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_quiz_malformed_json_is_400() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/quiz/matches")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"answers\":")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_quiz_step_walkthrough() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/quiz/step")
        .set_json(json!({ "action": { "answer": "vet-loan" } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["progress"]["step"], 1);
    assert_eq!(body["progress"]["answers"]["budget"], "vet-loan");
    assert_eq!(body["nextQuestion"]["id"], "timeline");

    let req = test::TestRequest::post()
        .uri("/api/quiz/step")
        .set_json(json!({ "progress": body["progress"], "action": { "answer": "online" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/quiz/step")
        .set_json(json!({ "progress": body["progress"], "action": "back" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["progress"]["step"], 0);
    assert_eq!(body["progress"]["answers"]["budget"], "vet-loan");
}

#[actix_web::test]
async fn test_quiz_step_rejects_out_of_range_progress() {
    let app = init_app!(create_state(None));

    for progress in [
        json!({ "step": 18446744073709551615u64, "complete": true }),
        json!({ "step": 9 }),
        json!({ "step": 2, "complete": true }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/quiz/step")
            .set_json(json!({ "progress": progress, "action": "back" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid quiz step");
    }
}

#[actix_web::test]
async fn test_quiz_questions() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/quiz/questions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[2]["id"], "studyMode");
}

#[actix_web::test]
async fn test_blog_post_is_rendered() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/blog/mfaa-vs-fbaa").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["slug"], "mfaa-vs-fbaa");
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("<h1>MFAA vs FBAA</h1>"));
    assert!(html.contains("<tr><td>Focus</td><td>Mortgage broking</td><td>Finance broking</td></tr>"));
    assert!(!html.contains("---"));
    assert!(body["related"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["slug"] != "mfaa-vs-fbaa"));
}

#[actix_web::test]
async fn test_unknown_slugs_are_404() {
    let app = init_app!(create_state(None));

    for uri in ["/api/blog/nope", "/api/providers/nope", "/api/modules/NOPE123"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404, "{}", uri);
    }
}

#[actix_web::test]
async fn test_content_listings() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/providers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["slug"], "harbour-finance-academy");

    let req = test::TestRequest::get().uri("/api/blog?category=Career%20Guides").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert!(body[0].get("content").is_none());

    let req = test::TestRequest::get().uri("/api/blog/recent?limit=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get().uri("/api/faq?q=VET").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().iter().any(|f| f["id"] == "vet-student-loan"));

    let req = test::TestRequest::get().uri("/api/modules?category=elective").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["modules"].as_array().unwrap().len(), 4);
    assert_eq!(body["totalCoreHours"], 490);
}

#[actix_web::test]
async fn test_providers_by_state() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/providers?state=WA").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["westcoast-mortgage-school", "national-broker-pathways"]);

    let req = test::TestRequest::get().uri("/api/providers?state=wa").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_pricing_summary() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/pricing").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["lowestPrice"], 2995.0);
    assert_eq!(body["highestPrice"], 5450.0);
    assert_eq!(body["averagePrice"], 4132.0);

    let providers = body["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 10);
    assert_eq!(providers[0]["slug"], "national-broker-pathways");
    assert_eq!(providers[9]["slug"], "capital-credit-college");
}

#[actix_web::test]
async fn test_provider_compliance() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get()
        .uri("/api/providers/southern-cross-broking-institute/compliance")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["riskLevel"], "low");
    assert_eq!(body["score"], 0);

    // registration conditions plus no VET approval
    let req = test::TestRequest::get()
        .uri("/api/providers/fasttrack-finance-diploma/compliance")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["score"], 4);
    assert_eq!(body["profile"]["hasConditions"], true);

    let req = test::TestRequest::get().uri("/api/providers/nope/compliance").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_compliance_risk_for_unlisted_organisation() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/compliance/risk")
        .set_json(json!({ "yearsOperating": 1, "vetApproved": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["score"], 2);
    assert_eq!(body["riskLevel"], "medium");

    let req = test::TestRequest::post()
        .uri("/api/compliance/risk")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["riskLevel"], "low");
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["providers"], 10);
    assert_eq!(body["persistence"], false);
}
