// src/config/model.rs

use serde::Deserialize;

use crate::types::CertificateSource;

/// Front door configuration exactly as read from a TOML file.
///
/// Nothing has been checked yet beyond the shape of the document:
///
/// ```toml
/// name = "my-front-door"
///
/// [[frontend_endpoint]]
/// name = "fe1"
/// host_name = "my-front-door.azurefd.net"
///
/// [[routing_rule]]
/// name = "rr1"
/// frontend_endpoints = ["fe1"]
/// [routing_rule.forwarding_configuration]
/// backend_pool_name = "bp1"
///
/// [[backend_pool]]
/// name = "bp1"
/// load_balancing_name = "lb1"
/// health_probe_name = "hp1"
///
/// [[backend_pool_load_balancing]]
/// name = "lb1"
///
/// [[backend_pool_health_probe]]
/// name = "hp1"
/// ```
///
/// Every collection is optional and defaults to empty. Use
/// [`FrontDoorConfig::try_from`] to get a checked configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFrontDoorConfig {
    /// Name of the front door itself.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub frontend_endpoint: Vec<FrontendEndpoint>,

    #[serde(default)]
    pub routing_rule: Vec<RoutingRule>,

    #[serde(default)]
    pub backend_pool: Vec<BackendPool>,

    #[serde(default)]
    pub backend_pool_load_balancing: Vec<LoadBalancingSettings>,

    #[serde(default)]
    pub backend_pool_health_probe: Vec<HealthProbeSettings>,
}

/// A configuration that passed field-format and relational validation.
///
/// Only obtainable through `TryFrom<RawFrontDoorConfig>` (see
/// `config::validate`), so holding one means the cross references resolve.
#[derive(Debug, Clone)]
pub struct FrontDoorConfig {
    pub name: Option<String>,
    pub frontend_endpoint: Vec<FrontendEndpoint>,
    pub routing_rule: Vec<RoutingRule>,
    pub backend_pool: Vec<BackendPool>,
    pub backend_pool_load_balancing: Vec<LoadBalancingSettings>,
    pub backend_pool_health_probe: Vec<HealthProbeSettings>,
}

impl FrontDoorConfig {
    pub(crate) fn new_unchecked(raw: RawFrontDoorConfig) -> Self {
        Self {
            name: raw.name,
            frontend_endpoint: raw.frontend_endpoint,
            routing_rule: raw.routing_rule,
            backend_pool: raw.backend_pool,
            backend_pool_load_balancing: raw.backend_pool_load_balancing,
            backend_pool_health_probe: raw.backend_pool_health_probe,
        }
    }

    /// Routing rules that forward to the given backend pool.
    pub fn rules_forwarding_to<'a>(
        &'a self,
        backend_pool: &'a str,
    ) -> impl Iterator<Item = &'a RoutingRule> + 'a {
        self.routing_rule.iter().filter(move |rr| {
            rr.forwarding_configuration
                .as_ref()
                .is_some_and(|fc| fc.backend_pool_name == backend_pool)
        })
    }
}

/// `[[frontend_endpoint]]`: a public host name accepting traffic.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendEndpoint {
    pub name: String,

    #[serde(default)]
    pub host_name: Option<String>,

    #[serde(default)]
    pub session_affinity_enabled: bool,

    /// Must be `true` exactly when `custom_https_configuration` is present.
    #[serde(default)]
    pub custom_https_provisioning_enabled: bool,

    #[serde(default)]
    pub custom_https_configuration: Option<CustomHttpsConfig>,
}

/// `[frontend_endpoint.custom_https_configuration]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomHttpsConfig {
    #[serde(default)]
    pub certificate_source: CertificateSource,

    #[serde(default)]
    pub azure_key_vault_certificate_secret_name: Option<String>,

    #[serde(default)]
    pub azure_key_vault_certificate_secret_version: Option<String>,

    #[serde(default)]
    pub azure_key_vault_certificate_vault_id: Option<String>,
}

/// `[[routing_rule]]`: maps frontend endpoints to a redirect or a forward.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingRule {
    pub name: String,

    /// Names of `[[frontend_endpoint]]` blocks, in declaration order.
    #[serde(default)]
    pub frontend_endpoints: Vec<String>,

    #[serde(default)]
    pub accepted_protocols: Vec<String>,

    #[serde(default)]
    pub patterns_to_match: Vec<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub redirect_configuration: Option<RedirectConfig>,

    #[serde(default)]
    pub forwarding_configuration: Option<ForwardingConfig>,
}

fn default_enabled() -> bool {
    true
}

/// `[routing_rule.redirect_configuration]`.
///
/// Only its presence matters to validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedirectConfig {
    #[serde(default)]
    pub redirect_protocol: Option<String>,
    #[serde(default)]
    pub redirect_type: Option<String>,
    #[serde(default)]
    pub custom_host: Option<String>,
    #[serde(default)]
    pub custom_path: Option<String>,
    #[serde(default)]
    pub custom_fragment: Option<String>,
    #[serde(default)]
    pub custom_query_string: Option<String>,
}

/// `[routing_rule.forwarding_configuration]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForwardingConfig {
    /// Name of a `[[backend_pool]]` block.
    #[serde(default)]
    pub backend_pool_name: String,

    #[serde(default)]
    pub forwarding_protocol: Option<String>,

    #[serde(default)]
    pub custom_forwarding_path: Option<String>,

    #[serde(default)]
    pub cache_enabled: bool,
}

/// `[[backend_pool]]`: origins traffic is forwarded to.
///
/// An absent settings name is kept as `""` and compared like any other name.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendPool {
    pub name: String,

    #[serde(default)]
    pub load_balancing_name: String,

    #[serde(default)]
    pub health_probe_name: String,
}

/// `[[backend_pool_load_balancing]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancingSettings {
    pub name: String,

    #[serde(default)]
    pub sample_size: Option<u32>,

    #[serde(default)]
    pub successful_samples_required: Option<u32>,

    #[serde(default)]
    pub additional_latency_milliseconds: Option<u32>,
}

/// `[[backend_pool_health_probe]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthProbeSettings {
    pub name: String,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub protocol: Option<String>,

    #[serde(default)]
    pub interval_in_seconds: Option<u32>,
}
