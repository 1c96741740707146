#![allow(dead_code)]

use frontdoor_validate::config::{
    BackendPool, CustomHttpsConfig, ForwardingConfig, FrontDoorConfig, FrontendEndpoint,
    HealthProbeSettings, LoadBalancingSettings, RawFrontDoorConfig, RedirectConfig, RoutingRule,
};
use frontdoor_validate::types::CertificateSource;

/// Builder for `RawFrontDoorConfig` to simplify test setup.
pub struct ConfigBuilder {
    config: RawFrontDoorConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawFrontDoorConfig::default(),
        }
    }

    /// The smallest valid topology:
    /// `fe1` -> `rr1` -> forward to `bp1` (`lb1`, `hp1`).
    pub fn minimal() -> Self {
        Self::new()
            .with_frontend(FrontendEndpointBuilder::new("fe1").build())
            .with_rule(RoutingRuleBuilder::new("rr1").frontend("fe1").forward_to("bp1").build())
            .with_pool(BackendPoolBuilder::new("bp1").load_balancing("lb1").health_probe("hp1").build())
            .with_load_balancing("lb1")
            .with_health_probe("hp1")
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.name = Some(name.to_string());
        self
    }

    pub fn with_frontend(mut self, fe: FrontendEndpoint) -> Self {
        self.config.frontend_endpoint.push(fe);
        self
    }

    pub fn with_rule(mut self, rule: RoutingRule) -> Self {
        self.config.routing_rule.push(rule);
        self
    }

    pub fn with_pool(mut self, pool: BackendPool) -> Self {
        self.config.backend_pool.push(pool);
        self
    }

    pub fn with_load_balancing(mut self, name: &str) -> Self {
        self.config
            .backend_pool_load_balancing
            .push(LoadBalancingSettings {
                name: name.to_string(),
                sample_size: None,
                successful_samples_required: None,
                additional_latency_milliseconds: None,
            });
        self
    }

    pub fn with_health_probe(mut self, name: &str) -> Self {
        self.config.backend_pool_health_probe.push(HealthProbeSettings {
            name: name.to_string(),
            path: None,
            protocol: None,
            interval_in_seconds: None,
        });
        self
    }

    /// Edit the frontend endpoint called `name` in place.
    pub fn map_frontend(mut self, name: &str, f: impl FnOnce(&mut FrontendEndpoint)) -> Self {
        if let Some(fe) = self.config.frontend_endpoint.iter_mut().find(|fe| fe.name == name) {
            f(fe);
        }
        self
    }

    /// Edit the routing rule called `name` in place.
    pub fn map_rule(mut self, name: &str, f: impl FnOnce(&mut RoutingRule)) -> Self {
        if let Some(rr) = self.config.routing_rule.iter_mut().find(|rr| rr.name == name) {
            f(rr);
        }
        self
    }

    pub fn build_raw(self) -> RawFrontDoorConfig {
        self.config
    }

    pub fn build(self) -> FrontDoorConfig {
        FrontDoorConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `FrontendEndpoint`.
pub struct FrontendEndpointBuilder {
    fe: FrontendEndpoint,
}

impl FrontendEndpointBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            fe: FrontendEndpoint {
                name: name.to_string(),
                host_name: None,
                session_affinity_enabled: false,
                custom_https_provisioning_enabled: false,
                custom_https_configuration: None,
            },
        }
    }

    pub fn host_name(mut self, host: &str) -> Self {
        self.fe.host_name = Some(host.to_string());
        self
    }

    pub fn https_enabled(mut self, val: bool) -> Self {
        self.fe.custom_https_provisioning_enabled = val;
        self
    }

    /// Attach a custom HTTPS block with a managed (non key-vault) certificate.
    pub fn managed_certificate(mut self) -> Self {
        self.fe.custom_https_configuration = Some(CustomHttpsConfig::default());
        self
    }

    /// Attach a custom HTTPS block using a key-vault certificate.
    pub fn key_vault_certificate(mut self, secret_name: &str, version: &str, vault_id: &str) -> Self {
        self.fe.custom_https_configuration = Some(CustomHttpsConfig {
            certificate_source: CertificateSource::AzureKeyVault,
            azure_key_vault_certificate_secret_name: Some(secret_name.to_string()),
            azure_key_vault_certificate_secret_version: Some(version.to_string()),
            azure_key_vault_certificate_vault_id: Some(vault_id.to_string()),
        });
        self
    }

    pub fn https_configuration(mut self, https: CustomHttpsConfig) -> Self {
        self.fe.custom_https_configuration = Some(https);
        self
    }

    pub fn build(self) -> FrontendEndpoint {
        self.fe
    }
}

/// Builder for `RoutingRule`.
pub struct RoutingRuleBuilder {
    rule: RoutingRule,
}

impl RoutingRuleBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            rule: RoutingRule {
                name: name.to_string(),
                frontend_endpoints: vec![],
                accepted_protocols: vec![],
                patterns_to_match: vec![],
                enabled: true,
                redirect_configuration: None,
                forwarding_configuration: None,
            },
        }
    }

    pub fn frontend(mut self, name: &str) -> Self {
        self.rule.frontend_endpoints.push(name.to_string());
        self
    }

    pub fn forward_to(mut self, backend_pool: &str) -> Self {
        self.rule.forwarding_configuration = Some(ForwardingConfig {
            backend_pool_name: backend_pool.to_string(),
            ..ForwardingConfig::default()
        });
        self
    }

    pub fn redirect(mut self) -> Self {
        self.rule.redirect_configuration = Some(RedirectConfig {
            redirect_protocol: Some("HttpsOnly".to_string()),
            redirect_type: Some("Moved".to_string()),
            ..RedirectConfig::default()
        });
        self
    }

    pub fn build(self) -> RoutingRule {
        self.rule
    }
}

/// Builder for `BackendPool`.
pub struct BackendPoolBuilder {
    pool: BackendPool,
}

impl BackendPoolBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            pool: BackendPool {
                name: name.to_string(),
                load_balancing_name: String::new(),
                health_probe_name: String::new(),
            },
        }
    }

    pub fn load_balancing(mut self, name: &str) -> Self {
        self.pool.load_balancing_name = name.to_string();
        self
    }

    pub fn health_probe(mut self, name: &str) -> Self {
        self.pool.health_probe_name = name.to_string();
        self
    }

    pub fn build(self) -> BackendPool {
        self.pool
    }
}
