//! Authenticator resolution from the environment
//!
//! Each service reads its credentials from environment variables named after
//! its auth key: `{KEY}_APIKEY`, `{KEY}_BEARER_TOKEN`, or `{KEY}_USERNAME` /
//! `{KEY}_PASSWORD` (key upper-cased). `{KEY}_AUTH_TYPE` forces a scheme,
//! `{KEY}_URL` overrides the service endpoint.

use crate::error::{CliError, CliResult};

/// An opaque bearer of credentials for one service.
///
/// The only capability exposed is attaching credentials to an outgoing
/// request; no credential state is owned beyond what the environment yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authenticator {
    /// Platform API key, sent as basic auth with the fixed `apikey` user
    ApiKey(String),
    /// Pre-issued bearer token
    Bearer(String),
    /// Username/password pair
    Basic { username: String, password: String },
    /// No credentials attached (explicit opt-out via `{KEY}_AUTH_TYPE=none`)
    NoAuth,
}

impl Authenticator {
    /// Attach these credentials to an outgoing request
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Authenticator::ApiKey(key) => request.basic_auth("apikey", Some(key)),
            Authenticator::Bearer(token) => request.bearer_auth(token),
            Authenticator::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Authenticator::NoAuth => request,
        }
    }
}

fn env_var(prefix: &str, suffix: &str) -> Option<String> {
    std::env::var(format!("{}_{}", prefix, suffix))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Resolve the authenticator for a service from its auth key.
///
/// Resolution order when `{KEY}_AUTH_TYPE` is unset: API key, bearer token,
/// basic credentials. Failure to find any is fatal at service construction.
pub fn resolve(auth_key: &str) -> CliResult<Authenticator> {
    let prefix = auth_key.to_uppercase();

    if let Some(auth_type) = env_var(&prefix, "AUTH_TYPE") {
        return match auth_type.to_lowercase().as_str() {
            "apikey" => env_var(&prefix, "APIKEY")
                .map(Authenticator::ApiKey)
                .ok_or_else(|| CliError::Config(format!("{}_APIKEY is not set", prefix))),
            "bearer" => env_var(&prefix, "BEARER_TOKEN")
                .map(Authenticator::Bearer)
                .ok_or_else(|| CliError::Config(format!("{}_BEARER_TOKEN is not set", prefix))),
            "basic" => {
                let username = env_var(&prefix, "USERNAME").ok_or_else(|| {
                    CliError::Config(format!("{}_USERNAME is not set", prefix))
                })?;
                let password = env_var(&prefix, "PASSWORD").ok_or_else(|| {
                    CliError::Config(format!("{}_PASSWORD is not set", prefix))
                })?;
                Ok(Authenticator::Basic { username, password })
            }
            "none" => Ok(Authenticator::NoAuth),
            other => Err(CliError::Config(format!(
                "Unknown auth type '{}' in {}_AUTH_TYPE (expected apikey, bearer, basic, or none)",
                other, prefix
            ))),
        };
    }

    if let Some(key) = env_var(&prefix, "APIKEY") {
        return Ok(Authenticator::ApiKey(key));
    }
    if let Some(token) = env_var(&prefix, "BEARER_TOKEN") {
        return Ok(Authenticator::Bearer(token));
    }
    if let (Some(username), Some(password)) =
        (env_var(&prefix, "USERNAME"), env_var(&prefix, "PASSWORD"))
    {
        return Ok(Authenticator::Basic { username, password });
    }

    Err(CliError::Config(format!(
        "No credentials found for service '{}'. Set {}_APIKEY, {}_BEARER_TOKEN, or {}_USERNAME and {}_PASSWORD.",
        auth_key, prefix, prefix, prefix, prefix
    )))
}

/// Resolve the endpoint override for a service, if any
pub fn endpoint_override(auth_key: &str) -> Option<String> {
    env_var(&auth_key.to_uppercase(), "URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses a distinct prefix so parallel tests never share vars.

    #[test]
    fn test_resolve_apikey() {
        std::env::set_var("AUTHTEST_ONE_APIKEY", "k-123");
        let auth = resolve("authtest_one").unwrap();
        assert_eq!(auth, Authenticator::ApiKey("k-123".to_string()));
        std::env::remove_var("AUTHTEST_ONE_APIKEY");
    }

    #[test]
    fn test_resolve_bearer() {
        std::env::set_var("AUTHTEST_TWO_BEARER_TOKEN", "t-456");
        let auth = resolve("authtest_two").unwrap();
        assert_eq!(auth, Authenticator::Bearer("t-456".to_string()));
        std::env::remove_var("AUTHTEST_TWO_BEARER_TOKEN");
    }

    #[test]
    fn test_resolve_basic() {
        std::env::set_var("AUTHTEST_THREE_USERNAME", "user");
        std::env::set_var("AUTHTEST_THREE_PASSWORD", "pass");
        let auth = resolve("authtest_three").unwrap();
        assert_eq!(
            auth,
            Authenticator::Basic {
                username: "user".to_string(),
                password: "pass".to_string(),
            }
        );
        std::env::remove_var("AUTHTEST_THREE_USERNAME");
        std::env::remove_var("AUTHTEST_THREE_PASSWORD");
    }

    #[test]
    fn test_resolve_missing_is_config_error() {
        let err = resolve("authtest_missing").unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("authtest_missing"));
    }

    #[test]
    fn test_apikey_takes_precedence_over_bearer() {
        std::env::set_var("AUTHTEST_FOUR_APIKEY", "k");
        std::env::set_var("AUTHTEST_FOUR_BEARER_TOKEN", "t");
        let auth = resolve("authtest_four").unwrap();
        assert_eq!(auth, Authenticator::ApiKey("k".to_string()));
        std::env::remove_var("AUTHTEST_FOUR_APIKEY");
        std::env::remove_var("AUTHTEST_FOUR_BEARER_TOKEN");
    }

    #[test]
    fn test_auth_type_forces_scheme() {
        std::env::set_var("AUTHTEST_FIVE_APIKEY", "k");
        std::env::set_var("AUTHTEST_FIVE_AUTH_TYPE", "bearer");
        let err = resolve("authtest_five").unwrap_err();
        assert!(err.to_string().contains("AUTHTEST_FIVE_BEARER_TOKEN"));
        std::env::remove_var("AUTHTEST_FIVE_APIKEY");
        std::env::remove_var("AUTHTEST_FIVE_AUTH_TYPE");
    }

    #[test]
    fn test_auth_type_none() {
        std::env::set_var("AUTHTEST_SIX_AUTH_TYPE", "none");
        let auth = resolve("authtest_six").unwrap();
        assert_eq!(auth, Authenticator::NoAuth);
        std::env::remove_var("AUTHTEST_SIX_AUTH_TYPE");
    }

    #[test]
    fn test_auth_type_unknown() {
        std::env::set_var("AUTHTEST_SEVEN_AUTH_TYPE", "kerberos");
        let err = resolve("authtest_seven").unwrap_err();
        assert!(err.to_string().contains("kerberos"));
        std::env::remove_var("AUTHTEST_SEVEN_AUTH_TYPE");
    }

    #[test]
    fn test_endpoint_override() {
        std::env::set_var("AUTHTEST_EIGHT_URL", "http://localhost:8080/api");
        assert_eq!(
            endpoint_override("authtest_eight").as_deref(),
            Some("http://localhost:8080/api")
        );
        std::env::remove_var("AUTHTEST_EIGHT_URL");
        assert_eq!(endpoint_override("authtest_eight"), None);
    }

    #[test]
    fn test_empty_value_is_ignored() {
        std::env::set_var("AUTHTEST_NINE_APIKEY", "  ");
        assert!(resolve("authtest_nine").is_err());
        std::env::remove_var("AUTHTEST_NINE_APIKEY");
    }
}
