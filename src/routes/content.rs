use actix_web::{web, HttpResponse, Responder};
use chrono::Datelike;
use crate::core::{assess, render_content, summarize, ComplianceProfile};
use crate::models::{BlogPostResponse, BlogSummary, ErrorResponse, Provider};
use crate::models::requests::{BlogQuery, FaqQuery, ModuleQuery, ProviderQuery, RecentQuery};
use crate::services::content::DEFAULT_RECENT_POSTS;
use super::{not_found, AppState};

/// Related posts shown under an article
const RELATED_POSTS: usize = 3;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/providers", web::get().to(list_providers))
        .route("/providers/{slug}", web::get().to(get_provider))
        .route("/providers/{slug}/compliance", web::get().to(provider_compliance))
        .route("/pricing", web::get().to(pricing_summary))
        .route("/compliance/risk", web::post().to(compliance_risk))
        .route("/blog", web::get().to(list_posts))
        .route("/blog/recent", web::get().to(recent_posts))
        .route("/blog/{slug}", web::get().to(get_post))
        .route("/faq", web::get().to(list_faqs))
        .route("/faq/categories", web::get().to(faq_categories))
        .route("/modules", web::get().to(list_modules))
        .route("/modules/{code}", web::get().to(get_module));
}

/// GET /api/providers?state={code} - highest rated first
async fn list_providers(
    state: web::Data<AppState>,
    query: web::Query<ProviderQuery>,
) -> impl Responder {
    let mut providers: Vec<&Provider> = match &query.state {
        Some(code) => state.content.providers_in_state(code),
        None => state.content.providers().iter().collect(),
    };
    providers.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    HttpResponse::Ok().json(providers)
}

/// GET /api/providers/{slug}
async fn get_provider(state: web::Data<AppState>, slug: web::Path<String>) -> impl Responder {
    match state.content.provider(&slug) {
        Some(provider) => HttpResponse::Ok().json(provider),
        None => not_found("Provider", &slug),
    }
}

/// GET /api/providers/{slug}/compliance
async fn provider_compliance(state: web::Data<AppState>, slug: web::Path<String>) -> impl Responder {
    let Some(provider) = state.content.provider(&slug) else {
        return not_found("Provider", &slug);
    };

    let profile = ComplianceProfile::for_provider(provider, chrono::Utc::now().year());
    let assessment = assess(&profile);

    HttpResponse::Ok().json(serde_json::json!({
        "slug": provider.slug,
        "profile": profile,
        "score": assessment.score,
        "riskLevel": assessment.level,
    }))
}

/// Score an organisation the site does not list
///
/// POST /api/compliance/risk
///
/// Request body:
/// ```json
/// {
///   "yearsOperating": 1,
///   "hasConditions": false,
///   "completionRate": 65,
///   "vetApproved": true
/// }
/// ```
async fn compliance_risk(profile: web::Json<ComplianceProfile>) -> impl Responder {
    let assessment = assess(&profile);

    HttpResponse::Ok().json(serde_json::json!({
        "score": assessment.score,
        "riskLevel": assessment.level,
    }))
}

/// GET /api/pricing - price range with providers cheapest first
async fn pricing_summary(state: web::Data<AppState>) -> impl Responder {
    match summarize(state.content.providers()) {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "No pricing available",
            "The provider catalog is empty",
            404,
        )),
    }
}

/// GET /api/blog?category={category}&featured={bool}
async fn list_posts(state: web::Data<AppState>, query: web::Query<BlogQuery>) -> impl Responder {
    let mut posts = match &query.category {
        Some(category) => state.content.posts_in_category(category),
        None => state.content.posts().iter().collect(),
    };
    if let Some(featured) = query.featured {
        posts.retain(|p| p.featured == featured);
    }

    let posts: Vec<BlogSummary> = posts.into_iter().map(BlogSummary::from).collect();

    HttpResponse::Ok().json(posts)
}

/// GET /api/blog/recent?limit={n}
async fn recent_posts(state: web::Data<AppState>, query: web::Query<RecentQuery>) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_POSTS);
    let posts: Vec<BlogSummary> = state
        .content
        .recent_posts(limit)
        .into_iter()
        .map(BlogSummary::from)
        .collect();

    HttpResponse::Ok().json(posts)
}

/// GET /api/blog/{slug} - the article with its body rendered to HTML
async fn get_post(state: web::Data<AppState>, slug: web::Path<String>) -> impl Responder {
    let Some(post) = state.content.post(&slug) else {
        return not_found("Post", &slug);
    };

    let related = state
        .content
        .recent_posts(RELATED_POSTS)
        .into_iter()
        .filter(|p| p.slug != post.slug)
        .map(BlogSummary::from)
        .collect();

    HttpResponse::Ok().json(BlogPostResponse {
        post,
        html: render_content(&post.content),
        related,
    })
}

/// GET /api/faq?category={id}&q={text}&featured={bool}
async fn list_faqs(state: web::Data<AppState>, query: web::Query<FaqQuery>) -> impl Responder {
    let mut items = match (query.q.as_deref().map(str::trim), &query.category) {
        (Some(q), _) if !q.is_empty() => state.content.search_faqs(q),
        (_, Some(category)) => state.content.faqs_in_category(category),
        _ => state.content.faq_items().iter().collect(),
    };

    if let Some(category) = &query.category {
        items.retain(|f| &f.category == category);
    }
    if let Some(featured) = query.featured {
        items.retain(|f| f.featured == featured);
    }

    HttpResponse::Ok().json(items)
}

/// GET /api/faq/categories
async fn faq_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.faq_categories())
}

/// GET /api/modules?category={core|elective}
async fn list_modules(state: web::Data<AppState>, query: web::Query<ModuleQuery>) -> impl Responder {
    let modules = match query.category {
        Some(category) => state.content.modules_in_category(category),
        None => state.content.modules().iter().collect(),
    };

    HttpResponse::Ok().json(serde_json::json!({
        "modules": modules,
        "totalCoreHours": state.content.total_core_hours(),
    }))
}

/// GET /api/modules/{code}
async fn get_module(state: web::Data<AppState>, code: web::Path<String>) -> impl Responder {
    match state.content.module(&code) {
        Some(module) => HttpResponse::Ok().json(module),
        None => not_found("Module", &code),
    }
}
