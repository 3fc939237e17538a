//! The fixed set of upstream services the gateway knows about.
//!
//! Adding a service means adding a row here; the loader iterates the table.

/// Environment variable holding the gateway listen port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

/// One row of the service table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Logical service name, used as the registry key.
    pub key: &'static str,
    /// Environment variable that overrides the URL.
    pub env_var: &'static str,
    /// URL used when the variable is unset or empty.
    pub default_url: &'static str,
}

pub const SERVICE_REGISTRY: [ServiceSpec; 4] = [
    ServiceSpec {
        key: "user-service",
        env_var: "USER_SERVICE_URL",
        default_url: "http://user-service:8081",
    },
    ServiceSpec {
        key: "auth-service",
        env_var: "AUTH_SERVICE_URL",
        default_url: "http://auth-service:8084",
    },
    ServiceSpec {
        key: "task-service",
        env_var: "TASK_SERVICE_URL",
        default_url: "http://task-service:8082",
    },
    ServiceSpec {
        key: "notification-service",
        env_var: "NOTIFICATION_SERVICE_URL",
        default_url: "http://notification-service:8083",
    },
];
