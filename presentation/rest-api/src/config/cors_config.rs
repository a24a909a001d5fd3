use std::env;

use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins, or "*"
///   to mirror any origin (default: "*")
///
/// Configuration:
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: content-type
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    if allowed_origins == "*" {
        // Poem's default mirrors the request origin.
        return cors;
    }

    let origins: Vec<&str> = allowed_origins.split(',').collect();
    cors.allow_origins(origins)
}
