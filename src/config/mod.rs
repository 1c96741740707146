// src/config/mod.rs

//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Check individual field formats (`fields.rs`).
//! - Check that sections reference each other consistently (`validate.rs`),
//!   using the name lookups in `lookup.rs`.

pub mod fields;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod validate;

pub use fields::{FieldReport, check_field_formats};
pub use loader::{default_config_path, load_and_validate, load_from_path, load_from_str};
pub use lookup::{KeyVaultMatch, Named, contains_name, find_by_name};
pub use model::{
    BackendPool, CustomHttpsConfig, ForwardingConfig, FrontDoorConfig, FrontendEndpoint,
    HealthProbeSettings, LoadBalancingSettings, RawFrontDoorConfig, RedirectConfig, RoutingRule,
};
pub use validate::validate_frontdoor_settings;
