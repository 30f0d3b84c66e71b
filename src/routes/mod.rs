// Route exports
pub mod discovery;
pub mod swipes;
pub mod users;

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::core::{DiscoveryEngine, MatchError, MatchResolver, MatchStore};
use crate::models::{ErrorResponse, HealthResponse, UserId};
use crate::services::TokenService;

/// Application state shared across all handlers
pub struct AppState<S> {
    pub store: Arc<S>,
    pub discovery: DiscoveryEngine<S>,
    pub resolver: MatchResolver<S>,
    pub tokens: TokenService,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            discovery: self.discovery.clone(),
            resolver: self.resolver.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

/// Register all routes for a concrete store backend.
pub fn configure_routes<S: MatchStore>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::<S>))
        .route("/user/create", web::post().to(users::create_user::<S>))
        .route("/login", web::post().to(users::login::<S>))
        .route("/discover", web::get().to(discovery::discover::<S>))
        .route("/swipe", web::post().to(swipes::swipe::<S>));
}

/// Health check endpoint
async fn health<S: MatchStore>(state: web::Data<AppState<S>>) -> impl Responder {
    let store_healthy = state.store.ping().await.is_ok();
    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map a domain error onto the wire error shape.
pub(crate) fn error_response(err: &MatchError) -> HttpResponse {
    let (status, code) = match err {
        MatchError::UnknownUser(_) => (StatusCode::NOT_FOUND, "unknown_user"),
        MatchError::InvalidAgeRange { .. } => (StatusCode::BAD_REQUEST, "invalid_age_range"),
        MatchError::EmptyGenderFilter => (StatusCode::BAD_REQUEST, "invalid_gender_filter"),
        MatchError::SelfSwipe => (StatusCode::BAD_REQUEST, "self_swipe"),
        MatchError::EmailInUse(_) => (StatusCode::CONFLICT, "email_in_use"),
        MatchError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable"),
    };

    let message = if status.is_server_error() {
        tracing::error!("Store failure: {}", err);
        "storage backend unavailable".to_string()
    } else {
        err.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: code.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Check the bearer token and that its subject is the acting user.
///
/// The engines downstream trust the id they are handed; this is the only
/// place the claimed id and the token subject are compared.
pub(crate) fn authorize(
    req: &HttpRequest,
    tokens: &TokenService,
    acting_user: UserId,
) -> Result<(), HttpResponse> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(HttpResponse::Unauthorized().json(ErrorResponse {
            error: "missing_token".to_string(),
            message: "Authorization: Bearer <token> header is required".to_string(),
            status_code: 401,
        }));
    };

    match tokens.verify(token) {
        Ok(subject) if subject == acting_user => Ok(()),
        Ok(subject) => {
            tracing::info!(
                "Token subject {} attempted to act as user {}",
                subject,
                acting_user
            );
            Err(HttpResponse::Forbidden().json(ErrorResponse {
                error: "subject_mismatch".to_string(),
                message: "token subject does not match user_id".to_string(),
                status_code: 403,
            }))
        }
        Err(e) => Err(HttpResponse::Unauthorized().json(ErrorResponse {
            error: "invalid_token".to_string(),
            message: e.to_string(),
            status_code: 401,
        })),
    }
}
