use crate::application::BlogService;
use crate::domain::{DomainError, NewPost};
use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Тело ответа с ошибкой
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::resource("/posts")
                .route(web::get().to(list_posts))
                .route(web::post().to(create_post)),
        );
}

/// Malformed bodies get the same `{ "error": ... }` shape as storage failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::warn!("Rejected request body: {}", message);
        let response = error_to_response(DomainError::InvalidBody(message));
        InternalError::from_response(err, response).into()
    })
}

fn error_to_response(err: DomainError) -> HttpResponse {
    let status = StatusCode::from_u16(err.to_status_code()).unwrap_or(StatusCode::BAD_REQUEST);

    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
    })
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn list_posts(blog_service: web::Data<Arc<BlogService>>) -> impl Responder {
    tracing::info!("Listing posts");

    match blog_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => {
            tracing::error!("Listing posts failed: {}", err);
            error_to_response(err)
        }
    }
}

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    post_data: web::Json<NewPost>,
) -> impl Responder {
    tracing::info!("Creating post");

    match blog_service.create_post(post_data.into_inner()).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => {
            tracing::error!("Creating post failed: {}", err);
            error_to_response(err)
        }
    }
}
