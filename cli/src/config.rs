/// Hosted registro service used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://registro-marca-api.onrender.com";

/// Base URL of the registro service, overridable via `REGISTRO_API_URL`.
pub fn api_base_url() -> String {
    std::env::var("REGISTRO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
