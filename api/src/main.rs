use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use vf_api::app;
use vf_api::middleware::cors;
use vf_api::routes::verification::AppState;

use vf_core::services::verification::{VerificationService, VerificationServiceConfig};
use vf_infra::cache::RedisSessionStore;
use vf_infra::database::{DatabasePool, MySqlEmailIdentityRepository};
use vf_infra::mail::AppMailer;
use vf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Veriflow API Server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!(
        "Environment: {}, server will bind to: {}",
        config.environment, bind_address
    );

    // Wire the infrastructure behind the service traits
    let db_pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let sessions = RedisSessionStore::connect(&config.cache)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let mailer = AppMailer::from_config(&config.mail)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    info!("Mail provider: {}", mailer.provider_name());

    let identities = MySqlEmailIdentityRepository::new(db_pool.get_pool().clone());

    let verification_service = VerificationService::new(
        Arc::new(mailer),
        Arc::new(sessions),
        Arc::new(identities),
        VerificationServiceConfig::from(config.verification.clone()),
    );

    let state = web::Data::new(AppState {
        verification_service: Arc::new(verification_service),
    });

    let workers = config.server.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors::create_cors())
            .app_data(state.clone())
            .configure(
                app::configure::<AppMailer, RedisSessionStore, MySqlEmailIdentityRepository>,
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?;

    // workers == 0 means one per CPU core, actix-web's own default
    if workers > 0 {
        server = server.workers(workers);
    }

    let result = server.run().await;

    db_pool.close().await;
    result
}
