use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::MatchStore;
use crate::models::{SwipeRequest, SwipeResponse};
use crate::routes::{authorize, error_response, AppState};

/// Swipe endpoint
///
/// POST /swipe
///
/// Request body:
/// ```json
/// {
///   "userId": 1,
///   "swipeeId": 2,
///   "liked": true
/// }
/// ```
///
/// Records the decision and reports whether a mutual match now exists.
/// Requires a bearer token whose subject is `userId`.
pub async fn swipe<S: MatchStore>(
    state: web::Data<AppState<S>>,
    req: web::Json<SwipeRequest>,
    http_req: HttpRequest,
) -> HttpResponse {
    if let Err(denied) = authorize(&http_req, &state.tokens, req.user_id) {
        return denied;
    }

    match state
        .resolver
        .swipe(req.user_id, req.swipee_id, req.liked)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(SwipeResponse { results: outcome }),
        Err(e) => error_response(&e),
    }
}
