use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::responses::CreatedUser;
use crate::models::{
    ErrorResponse, LoginRequest, NewUser, Position, RegisterRequest, TokenResponse,
    UserCreatedResponse,
};
use crate::routes::{error_response, AppState};

/// Create user endpoint
///
/// POST /user/create
///
/// Request body:
/// ```json
/// {
///   "email": "string",
///   "name": "string",
///   "password": "string",
///   "gender": "string",
///   "age": 30,
///   "location": {"x": 0.0, "y": 0.0}
/// }
/// ```
pub async fn create_user<S: crate::core::MatchStore>(
    state: web::Data<AppState<S>>,
    req: web::Json<RegisterRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let new_user = NewUser {
        email: req.email.clone(),
        name: req.name.clone(),
        password: req.password.clone(),
        gender: req.gender.clone(),
        age: req.age,
        position: Position::new(req.location.x, req.location.y),
    };

    match state.store.create_user(new_user).await {
        Ok(user) => {
            tracing::info!("Created user {} ({})", user.id, user.email);
            HttpResponse::Ok().json(UserCreatedResponse {
                result: CreatedUser {
                    id: user.id,
                    email: user.email,
                    name: user.name,
                    gender: user.gender,
                    age: user.age,
                },
            })
        }
        Err(e) => error_response(&e),
    }
}

/// Login endpoint
///
/// POST /login
///
/// Verifies the credential pair and returns a bearer token whose subject is
/// the user id.
pub async fn login<S: crate::core::MatchStore>(
    state: web::Data<AppState<S>>,
    req: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.authenticate(&req.email, &req.password).await {
        Ok(Some(user_id)) => match state.tokens.issue(user_id) {
            Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
            Err(e) => {
                tracing::error!("Failed to issue token for user {}: {}", user_id, e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "token_issue_failed".to_string(),
                    message: "Failed to generate token".to_string(),
                    status_code: 500,
                })
            }
        },
        Ok(None) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }),
        Err(e) => error_response(&e),
    }
}
