// src/errors.rs

//! Crate-wide error types.
//!
//! [`Violation`] is what the relational validator returns: exactly one,
//! the first inconsistency found. [`FrontDoorError`] wraps it together with
//! everything that can go wrong before validation gets to run (IO, TOML,
//! per-field format checks).

use std::fmt;

use thiserror::Error;

/// Stable classification of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required list is empty.
    MissingRequiredCollection,
    /// A required sub-block is absent.
    MissingConfigurationBlock,
    /// Two mutually exclusive sub-blocks are both present.
    ConflictingConfigurationBlocks,
    /// A name does not resolve in the collection it refers to.
    DanglingReference,
    /// HTTPS configuration present while provisioning is disabled.
    InvalidTlsState,
    /// Key-vault certificate source with key-vault fields missing.
    IncompleteTlsConfig,
    /// Non key-vault certificate source with key-vault fields set.
    ExtraneousTlsConfig,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingRequiredCollection => "MissingRequiredCollection",
            ViolationKind::MissingConfigurationBlock => "MissingConfigurationBlock",
            ViolationKind::ConflictingConfigurationBlocks => "ConflictingConfigurationBlocks",
            ViolationKind::DanglingReference => "DanglingReference",
            ViolationKind::InvalidTlsState => "InvalidTlsState",
            ViolationKind::IncompleteTlsConfig => "IncompleteTlsConfig",
            ViolationKind::ExtraneousTlsConfig => "ExtraneousTlsConfig",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first cross-field inconsistency found in a configuration.
///
/// The display text is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error(r#""frontend_endpoint": must have at least one "frontend_endpoint" defined, found 0"#)]
    NoFrontendEndpoints,

    #[error(
        r#""routing_rule":{rule:?} is invalid. you must have either a "redirect_configuration" or a "forwarding_configuration" defined for the "routing_rule":{rule:?}"#
    )]
    NoRoutingConfiguration { rule: String },

    #[error(
        r#""routing_rule":{rule:?} is invalid. "redirect_configuration" conflicts with "forwarding_configuration". You can only have one configuration type per each routing rule"#
    )]
    ConflictingRoutingConfiguration { rule: String },

    #[error(
        r#""routing_rule":{rule:?} is invalid. "backend_pool":{backend_pool:?} was not found in the configuration file. verify you have the "backend_pool":{backend_pool:?} defined in the configuration file"#
    )]
    UnknownBackendPool { rule: String, backend_pool: String },

    #[error(r#""routing_rule": {rule:?} must have at least one "frontend_endpoints" defined"#)]
    NoRoutingRuleFrontends { rule: String },

    #[error(
        r#""routing_rule":{rule:?} "frontend_endpoints":{frontend_endpoint:?} was not found in the configuration file. verify you have the "frontend_endpoint":{frontend_endpoint:?} defined in the configuration file"#
    )]
    UnknownFrontendEndpoint {
        rule: String,
        frontend_endpoint: String,
    },

    #[error(
        r#""backend_pool":{backend_pool:?} "load_balancing_name":{load_balancing:?} was not found in the configuration file. verify you have the "backend_pool_load_balancing":{load_balancing:?} defined in the configuration file"#
    )]
    UnknownLoadBalancing {
        backend_pool: String,
        load_balancing: String,
    },

    #[error(
        r#""backend_pool":{backend_pool:?} "health_probe_name":{health_probe:?} was not found in the configuration file. verify you have the "backend_pool_health_probe":{health_probe:?} defined in the configuration file"#
    )]
    UnknownHealthProbe {
        backend_pool: String,
        health_probe: String,
    },

    #[error(
        r#""frontend_endpoint":{frontend_endpoint:?} "custom_https_configuration" is invalid because "custom_https_provisioning_enabled" is set to "false". please remove the "custom_https_configuration" block from the configuration file"#
    )]
    HttpsConfigurationWhileDisabled { frontend_endpoint: String },

    #[error(
        r#""frontend_endpoint":{frontend_endpoint:?} "custom_https_configuration" is invalid, all of the following keys must have values in the "custom_https_configuration" block: "azure_key_vault_certificate_secret_name", "azure_key_vault_certificate_secret_version", and "azure_key_vault_certificate_vault_id""#
    )]
    IncompleteKeyVaultCertificate { frontend_endpoint: String },

    #[error(
        r#""frontend_endpoint":{frontend_endpoint:?} "custom_https_configuration" is invalid, all of the following keys must be removed from the "custom_https_configuration" block: "azure_key_vault_certificate_secret_name", "azure_key_vault_certificate_secret_version", and "azure_key_vault_certificate_vault_id""#
    )]
    ExtraneousKeyVaultCertificate { frontend_endpoint: String },

    #[error(
        r#""frontend_endpoint":{frontend_endpoint:?} configuration is invalid because "custom_https_provisioning_enabled" is set to "true" and the "custom_https_configuration" block is undefined. please add the "custom_https_configuration" block to the configuration file"#
    )]
    MissingHttpsConfiguration { frontend_endpoint: String },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::NoFrontendEndpoints | Violation::NoRoutingRuleFrontends { .. } => {
                ViolationKind::MissingRequiredCollection
            }
            Violation::NoRoutingConfiguration { .. }
            | Violation::MissingHttpsConfiguration { .. } => {
                ViolationKind::MissingConfigurationBlock
            }
            Violation::ConflictingRoutingConfiguration { .. } => {
                ViolationKind::ConflictingConfigurationBlocks
            }
            Violation::UnknownBackendPool { .. }
            | Violation::UnknownFrontendEndpoint { .. }
            | Violation::UnknownLoadBalancing { .. }
            | Violation::UnknownHealthProbe { .. } => ViolationKind::DanglingReference,
            Violation::HttpsConfigurationWhileDisabled { .. } => ViolationKind::InvalidTlsState,
            Violation::IncompleteKeyVaultCertificate { .. } => ViolationKind::IncompleteTlsConfig,
            Violation::ExtraneousKeyVaultCertificate { .. } => ViolationKind::ExtraneousTlsConfig,
        }
    }

    /// Name of the entity that owns the offending field, if there is one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Violation::NoFrontendEndpoints => None,
            Violation::NoRoutingConfiguration { rule }
            | Violation::ConflictingRoutingConfiguration { rule }
            | Violation::UnknownBackendPool { rule, .. }
            | Violation::NoRoutingRuleFrontends { rule }
            | Violation::UnknownFrontendEndpoint { rule, .. } => Some(rule),
            Violation::UnknownLoadBalancing { backend_pool, .. }
            | Violation::UnknownHealthProbe { backend_pool, .. } => Some(backend_pool),
            Violation::HttpsConfigurationWhileDisabled { frontend_endpoint }
            | Violation::IncompleteKeyVaultCertificate { frontend_endpoint }
            | Violation::ExtraneousKeyVaultCertificate { frontend_endpoint }
            | Violation::MissingHttpsConfiguration { frontend_endpoint } => {
                Some(frontend_endpoint)
            }
        }
    }

    /// The unresolved name, for dangling references.
    pub fn dangling_name(&self) -> Option<&str> {
        match self {
            Violation::UnknownBackendPool { backend_pool, .. } => Some(backend_pool),
            Violation::UnknownFrontendEndpoint {
                frontend_endpoint, ..
            } => Some(frontend_endpoint),
            Violation::UnknownLoadBalancing { load_balancing, .. } => Some(load_balancing),
            Violation::UnknownHealthProbe { health_probe, .. } => Some(health_probe),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FrontDoorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("invalid field values:\n  {}", .0.join("\n  "))]
    InvalidFields(Vec<String>),

    #[error(transparent)]
    Violation(#[from] Violation),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FrontDoorError>;
