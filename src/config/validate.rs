// src/config/validate.rs

use tracing::{debug, warn};

use crate::config::fields::check_field_formats;
use crate::config::lookup::{KeyVaultMatch, contains_name};
use crate::config::model::{
    BackendPool, FrontDoorConfig, FrontendEndpoint, RawFrontDoorConfig, RoutingRule,
};
use crate::errors::{FrontDoorError, Violation};

impl TryFrom<RawFrontDoorConfig> for FrontDoorConfig {
    type Error = FrontDoorError;

    fn try_from(raw: RawFrontDoorConfig) -> std::result::Result<Self, Self::Error> {
        let field_errors = check_field_formats(&raw);
        if !field_errors.is_empty() {
            return Err(FrontDoorError::InvalidFields(field_errors));
        }
        validate_frontdoor_settings(&raw)?;
        Ok(FrontDoorConfig::new_unchecked(raw))
    }
}

/// Check that the sections of a configuration agree with each other.
///
/// Checks run in a fixed order and the first failure is returned:
/// - there is at least one frontend endpoint
/// - every routing rule has exactly one of redirect / forwarding config,
///   forwards to an existing backend pool, and lists only existing
///   frontend endpoints (at least one)
/// - every backend pool names existing load-balancing and health-probe
///   settings, when any such settings are defined at all
/// - custom HTTPS configuration matches `custom_https_provisioning_enabled`
///   and the certificate source
///
/// Field formats (name lengths, charsets) are not looked at here, see
/// `config::fields`.
pub fn validate_frontdoor_settings(cfg: &RawFrontDoorConfig) -> Result<(), Violation> {
    ensure_has_frontend_endpoints(cfg)?;
    validate_routing_rules(cfg)?;
    validate_backend_pool_settings(cfg)?;
    validate_custom_https(cfg)?;
    Ok(())
}

fn ensure_has_frontend_endpoints(cfg: &RawFrontDoorConfig) -> Result<(), Violation> {
    if cfg.frontend_endpoint.is_empty() {
        return Err(Violation::NoFrontendEndpoints);
    }
    Ok(())
}

fn validate_routing_rules(cfg: &RawFrontDoorConfig) -> Result<(), Violation> {
    for rule in cfg.routing_rule.iter() {
        debug!(routing_rule = %rule.name, "checking routing rule");
        validate_routing_configuration(cfg, rule)?;
        validate_routing_frontends(cfg, rule)?;
    }
    Ok(())
}

fn validate_routing_configuration(
    cfg: &RawFrontDoorConfig,
    rule: &RoutingRule,
) -> Result<(), Violation> {
    match (&rule.redirect_configuration, &rule.forwarding_configuration) {
        (None, None) => Err(Violation::NoRoutingConfiguration {
            rule: rule.name.clone(),
        }),
        (Some(_), Some(_)) => Err(Violation::ConflictingRoutingConfiguration {
            rule: rule.name.clone(),
        }),
        (Some(_), None) => Ok(()),
        (None, Some(forward)) => {
            if !contains_name(&cfg.backend_pool, &forward.backend_pool_name) {
                return Err(Violation::UnknownBackendPool {
                    rule: rule.name.clone(),
                    backend_pool: forward.backend_pool_name.clone(),
                });
            }
            Ok(())
        }
    }
}

fn validate_routing_frontends(
    cfg: &RawFrontDoorConfig,
    rule: &RoutingRule,
) -> Result<(), Violation> {
    if rule.frontend_endpoints.is_empty() {
        return Err(Violation::NoRoutingRuleFrontends {
            rule: rule.name.clone(),
        });
    }

    for frontend in rule.frontend_endpoints.iter() {
        if !contains_name(&cfg.frontend_endpoint, frontend) {
            return Err(Violation::UnknownFrontendEndpoint {
                rule: rule.name.clone(),
                frontend_endpoint: frontend.clone(),
            });
        }
    }
    Ok(())
}

fn validate_backend_pool_settings(cfg: &RawFrontDoorConfig) -> Result<(), Violation> {
    for pool in cfg.backend_pool.iter() {
        debug!(backend_pool = %pool.name, "checking backend pool settings");
        validate_load_balancing_reference(cfg, pool)?;
        validate_health_probe_reference(cfg, pool)?;
    }
    Ok(())
}

// Without any settings blocks there is nothing to resolve against, and a
// pool naming one is let through.
fn validate_load_balancing_reference(
    cfg: &RawFrontDoorConfig,
    pool: &BackendPool,
) -> Result<(), Violation> {
    if cfg.backend_pool_load_balancing.is_empty() {
        if !pool.load_balancing_name.is_empty() {
            warn!(
                backend_pool = %pool.name,
                load_balancing_name = %pool.load_balancing_name,
                "no backend_pool_load_balancing blocks defined; reference not checked"
            );
        }
        return Ok(());
    }

    if !contains_name(&cfg.backend_pool_load_balancing, &pool.load_balancing_name) {
        return Err(Violation::UnknownLoadBalancing {
            backend_pool: pool.name.clone(),
            load_balancing: pool.load_balancing_name.clone(),
        });
    }
    Ok(())
}

fn validate_health_probe_reference(
    cfg: &RawFrontDoorConfig,
    pool: &BackendPool,
) -> Result<(), Violation> {
    if cfg.backend_pool_health_probe.is_empty() {
        if !pool.health_probe_name.is_empty() {
            warn!(
                backend_pool = %pool.name,
                health_probe_name = %pool.health_probe_name,
                "no backend_pool_health_probe blocks defined; reference not checked"
            );
        }
        return Ok(());
    }

    if !contains_name(&cfg.backend_pool_health_probe, &pool.health_probe_name) {
        return Err(Violation::UnknownHealthProbe {
            backend_pool: pool.name.clone(),
            health_probe: pool.health_probe_name.clone(),
        });
    }
    Ok(())
}

fn validate_custom_https(cfg: &RawFrontDoorConfig) -> Result<(), Violation> {
    for frontend in cfg.frontend_endpoint.iter() {
        debug!(frontend_endpoint = %frontend.name, "checking custom https configuration");
        validate_frontend_https(frontend)?;
    }
    Ok(())
}

fn validate_frontend_https(frontend: &FrontendEndpoint) -> Result<(), Violation> {
    let enabled = frontend.custom_https_provisioning_enabled;

    let Some(https) = frontend.custom_https_configuration.as_ref() else {
        if enabled {
            return Err(Violation::MissingHttpsConfiguration {
                frontend_endpoint: frontend.name.clone(),
            });
        }
        return Ok(());
    };

    if !enabled {
        return Err(Violation::HttpsConfigurationWhileDisabled {
            frontend_endpoint: frontend.name.clone(),
        });
    }

    if https.certificate_source.is_key_vault() {
        if !https.has_key_vault_values(KeyVaultMatch::All) {
            return Err(Violation::IncompleteKeyVaultCertificate {
                frontend_endpoint: frontend.name.clone(),
            });
        }
    } else if https.has_key_vault_values(KeyVaultMatch::Any) {
        return Err(Violation::ExtraneousKeyVaultCertificate {
            frontend_endpoint: frontend.name.clone(),
        });
    }
    Ok(())
}
