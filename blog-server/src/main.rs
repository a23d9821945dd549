use dotenvy::dotenv;
use std::sync::Arc;

use blog_server::application::BlogService;
use blog_server::infrastructure::{
    config::AppConfig, database::build_post_repository, logging::init_logging,
};
use blog_server::presentation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_logging();

    let config = AppConfig::from_env();
    let http_addr = config.bind_addr();

    tracing::info!("Starting blog server...");
    tracing::info!("HTTP server will listen on {}", http_addr);
    tracing::info!("Storage backend: {}", config.storage.describe());
    tracing::info!("CORS allowed origins: {}", config.cors_allowed_origins);

    // Storage client is created once and handed to the handlers
    let post_repo = build_post_repository(&config.storage).await?;
    let blog_service = Arc::new(BlogService::new(post_repo));

    tracing::info!("Services initialized successfully");

    run_http_server(http_addr, blog_service, config.cors_allowed_origins).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// Configure CORS for the HTTP server with allowed origins from .env
fn configure_cors(allowed_origins: &str) -> actix_cors::Cors {
    use actix_cors::Cors;
    use actix_web::http::header;

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    // Добавляем каждый разрешенный домен
    for origin in allowed_origins.split(',').map(|s| s.trim()) {
        if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
            tracing::debug!("Added allowed CORS origin: {}", origin);
        }
    }

    cors
}

async fn run_http_server(
    addr: String,
    blog_service: Arc<BlogService>,
    cors_allowed_origins: String,
) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&cors_allowed_origins))
            .app_data(web::Data::new(blog_service.clone()))
            .configure(presentation::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
