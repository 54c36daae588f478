//! API-key access control.
//!
//! All `/briefings` routes require the static shared secret in the
//! `x-api-key` header. One carve-out: an unauthenticated `GET` with a
//! `uuid` query parameter is allowed when the request's referer is a
//! public share-view page (`/b/<id>`), so a shared brief can be viewed
//! anonymously without exposing the secret.

use crate::{AppState, ErrorBody};
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Route prefixes that require the API key.
const PROTECTED_ROUTES: &[&str] = &["/briefings"];

fn is_protected(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|route| path.starts_with(route))
}

fn has_uuid_param(query: Option<&str>) -> bool {
    query.is_some_and(|query| {
        query
            .split('&')
            .any(|pair| pair == "uuid" || pair.starts_with("uuid="))
    })
}

/// Whether this request qualifies for the anonymous share-view read.
fn is_public_share_read(request: &Request) -> bool {
    if request.method() != Method::GET || !has_uuid_param(request.uri().query()) {
        return false;
    }

    request
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|referer| referer.contains("/b/"))
}

/// Middleware enforcing the static-key check on protected routes.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !is_protected(request.uri().path()) {
        return next.run(request).await;
    }

    let Some(expected) = state.config.api_key.as_deref() else {
        tracing::error!("API_KEY not set in environment");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Server misconfiguration".to_owned(),
            }),
        )
            .into_response();
    };

    if is_public_share_read(&request) {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "Unauthorized".to_owned(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_param_detection() {
        assert!(has_uuid_param(Some("uuid=abc")));
        assert!(has_uuid_param(Some("x=1&uuid=abc")));
        assert!(!has_uuid_param(Some("id=abc")));
        assert!(!has_uuid_param(None));
    }

    #[test]
    fn only_briefings_routes_are_protected() {
        assert!(is_protected("/briefings"));
        assert!(is_protected("/briefings?uuid=x"));
        assert!(!is_protected("/health"));
        assert!(!is_protected("/swagger-ui"));
    }
}
