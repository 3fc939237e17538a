//! Configuration loading from the environment.
//!
//! Loading is total: every field has a built-in fallback, so a missing or
//! empty variable is never an error, only a signal to use the default.

use std::collections::HashMap;

use crate::config::env::{EnvironmentReader, ProcessEnv};
use crate::config::registry::{DEFAULT_PORT, PORT_ENV_VAR, SERVICE_REGISTRY};
use crate::config::schema::{GatewayConfig, ServiceConfig};

/// Load the gateway configuration from the process environment.
pub fn load_config() -> GatewayConfig {
    load_config_from(&ProcessEnv)
}

/// Load the gateway configuration from an arbitrary environment.
pub fn load_config_from(env: &impl EnvironmentReader) -> GatewayConfig {
    let port = resolve_with_default(env, PORT_ENV_VAR, DEFAULT_PORT);

    let services: HashMap<String, ServiceConfig> = SERVICE_REGISTRY
        .iter()
        .map(|spec| {
            let url = resolve_with_default(env, spec.env_var, spec.default_url);
            let service = ServiceConfig {
                name: spec.key.to_string(),
                url,
            };
            (spec.key.to_string(), service)
        })
        .collect();

    tracing::info!(
        port = %port,
        service_count = services.len(),
        "Gateway configuration loaded"
    );

    GatewayConfig { port, services }
}

/// Resolve `key` from `env`, falling back to `default`.
///
/// A variable set to the empty string counts as unset. The value is returned
/// as-is otherwise: no trimming, normalisation or validation.
pub fn resolve_with_default(env: &impl EnvironmentReader, key: &str, default: &str) -> String {
    match env.get(key) {
        Some(value) if !value.is_empty() => {
            tracing::debug!(key, value = %value, "Using environment value");
            value
        }
        _ => {
            tracing::debug!(key, default, "Using default value");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MapEnv;

    #[test]
    fn test_defaults_when_unset() {
        let config = load_config_from(&MapEnv::new());

        assert_eq!(config.port, "8080");
        for spec in &SERVICE_REGISTRY {
            assert_eq!(config.service_url(spec.key), Some(spec.default_url));
        }
    }

    #[test]
    fn test_overrides_taken_verbatim() {
        let env: MapEnv = SERVICE_REGISTRY
            .iter()
            .map(|spec| (spec.env_var, format!(" X-{} ", spec.key)))
            .collect();
        let config = load_config_from(&env);

        for spec in &SERVICE_REGISTRY {
            let expected = format!(" X-{} ", spec.key);
            assert_eq!(config.service_url(spec.key), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let env = MapEnv::new()
            .with("PORT", "")
            .with("TASK_SERVICE_URL", "");
        let config = load_config_from(&env);

        assert_eq!(config.port, "8080");
        assert_eq!(config.service_url("task-service"), Some("http://task-service:8082"));
    }

    #[test]
    fn test_port_override() {
        let config = load_config_from(&MapEnv::new().with("PORT", "9090"));
        assert_eq!(config.port, "9090");
    }

    #[test]
    fn test_port_not_validated() {
        let config = load_config_from(&MapEnv::new().with("PORT", "not-a-port"));
        assert_eq!(config.port, "not-a-port");
    }

    #[test]
    fn test_exactly_four_services() {
        let env = MapEnv::new()
            .with("BILLING_SERVICE_URL", "http://billing:9999")
            .with("USER_SERVICE_URL", "http://users.local");
        let config = load_config_from(&env);

        let mut keys: Vec<_> = config.services.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["auth-service", "notification-service", "task-service", "user-service"]
        );
    }

    #[test]
    fn test_service_name_matches_key() {
        let config = load_config_from(&MapEnv::new());
        for (key, service) in &config.services {
            assert_eq!(key, &service.name);
        }
    }

    #[test]
    fn test_resolve_with_default() {
        let env = MapEnv::new().with("SET", "value").with("EMPTY", "");

        assert_eq!(resolve_with_default(&env, "SET", "fallback"), "value");
        assert_eq!(resolve_with_default(&env, "EMPTY", "fallback"), "fallback");
        assert_eq!(resolve_with_default(&env, "UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let env = MapEnv::new().with("PORT", " ");
        assert_eq!(resolve_with_default(&env, "PORT", "8080"), " ");
    }
}
