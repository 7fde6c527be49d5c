use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::{env_or_default, ConfigError, FromEnv};

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS settings shared by every response.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allow_origin: HeaderValue,
}

impl CorsConfig {
    pub fn new(allow_origin: HeaderValue) -> Self {
        Self { allow_origin }
    }

    fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(HeaderValue::from_static("*"))
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ORIGIN`, defaulting to the wildcard origin.
    fn from_env() -> Result<Self, ConfigError> {
        let origin = env_or_default("CORS_ORIGIN", "*");
        let allow_origin =
            HeaderValue::from_str(origin.trim()).map_err(|e| ConfigError::ParseError {
                key: "CORS_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { allow_origin })
    }
}

/// Adds the CORS headers to every response.
///
/// Any `OPTIONS` request is answered here with `200 OK` and never reaches the
/// router, so it carries the CORS headers only.
pub async fn cors_headers(
    State(cors): State<CorsConfig>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = (StatusCode::OK, "OK").into_response();
        cors.apply(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    cors.apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_defaults_to_wildcard() {
        temp_env::with_var_unset("CORS_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allow_origin, "*");
        });
    }

    #[test]
    fn test_cors_config_reads_origin() {
        temp_env::with_var("CORS_ORIGIN", Some("https://shop.example.com"), || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allow_origin, "https://shop.example.com");
        });
    }

    #[test]
    fn test_cors_config_rejects_invalid_header_value() {
        temp_env::with_var("CORS_ORIGIN", Some("bad\norigin"), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ORIGIN"));
        });
    }
}
