//! Cross-origin policy for the evaluation frontend.

use std::sync::Arc;

use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

use crate::state::AppState;

/// Build the CORS layer from the configured origin list.
///
/// With origins configured, the exact list is allowed with credentials;
/// methods and headers mirror whatever the preflight asks for, since a
/// credentialed response may not use wildcards.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    if let Some(origins_str) = &state.config.cors_allowed_origins {
        let origins: Vec<axum::http::HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        if !origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true);
        }
    }

    // Wildcard – suitable for development; set RAGEVAL_CORS_ORIGINS in
    // production.
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
}
