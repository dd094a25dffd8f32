use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use rto_compare::config::{LoggingSettings, Settings};
use rto_compare::core::Matcher;
use rto_compare::routes::{self, AppState};
use rto_compare::services::{ContentStore, SupabaseClient, SupabaseTables};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting RTO Compare service...");

    // Static content is loaded once and never mutated
    let content = ContentStore::load(&settings.content.dir).map_err(|e| {
        error!("Failed to load content from {}: {}", settings.content.dir.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    let content = Arc::new(content);

    // Hosted database is optional; leads are still acknowledged without it
    let supabase = match settings.supabase.as_ref().filter(|s| s.is_configured()) {
        Some(cfg) => {
            let tables = SupabaseTables {
                leads: cfg.leads_table.clone(),
                quiz_submissions: cfg.quiz_table.clone(),
            };
            let client = SupabaseClient::new(
                cfg.url.clone(),
                cfg.api_key.clone(),
                tables,
                Duration::from_secs(cfg.timeout_secs),
            )
            .map_err(|e| {
                error!("Failed to create Supabase client: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;
            info!("Supabase client initialized for {}", cfg.url);
            Some(Arc::new(client))
        }
        None => {
            warn!("Supabase not configured - leads and quiz submissions will not be stored");
            None
        }
    };

    let matcher = Matcher::new(settings.matching.limit);

    info!("Matcher initialized (limit: {})", matcher.limit());

    let app_state = AppState {
        content,
        supabase,
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
