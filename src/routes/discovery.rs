use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::{DiscoveryRequest, MatchStore};
use crate::models::{DiscoverQuery, DiscoverResponse};
use crate::routes::{authorize, error_response, AppState};

/// Discover endpoint
///
/// GET /discover?user_id=...&genders=g1,g2[&min_age=n][&max_age=n]
///
/// Returns candidates the user has not yet swiped on, nearest first.
/// `genders` is a comma-separated list; omitting it means all genders.
/// Requires a bearer token whose subject is `user_id`.
pub async fn discover<S: MatchStore>(
    state: web::Data<AppState<S>>,
    query: web::Query<DiscoverQuery>,
    http_req: HttpRequest,
) -> HttpResponse {
    if let Err(denied) = authorize(&http_req, &state.tokens, query.user_id) {
        return denied;
    }

    let genders = query.genders.as_ref().map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect::<Vec<_>>()
    });

    let request = DiscoveryRequest {
        genders,
        min_age: query.min_age,
        max_age: query.max_age,
    };

    match state.discovery.discover(query.user_id, request).await {
        Ok(results) => {
            tracing::info!(
                "Returning {} candidates for user {}",
                results.len(),
                query.user_id
            );
            HttpResponse::Ok().json(DiscoverResponse { results })
        }
        Err(e) => error_response(&e),
    }
}
