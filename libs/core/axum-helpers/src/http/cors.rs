use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer for a [`CorsConfig`].
///
/// Allow-listed origins get the API's methods (GET, POST, PUT, DELETE,
/// OPTIONS), JSON headers and a 1 hour preflight cache. `Permissive` is
/// meant for development only.
///
/// # Errors
/// Returns `InvalidInput` if an allow-listed origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let layer = match config {
        CorsConfig::Permissive => CorsLayer::permissive(),
        CorsConfig::Disabled => CorsLayer::new(),
        CorsConfig::AllowList(origins) => {
            let allowed_origins = origins
                .iter()
                .map(|s| s.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
                    )
                })?;

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(Duration::from_secs(3600))
        }
    };

    Ok(layer)
}
