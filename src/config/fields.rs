// src/config/fields.rs

//! Per-field format validators.
//!
//! Each validator takes the field value and its key (e.g.
//! `routing_rule.0.name`) and reports warnings and errors for that one
//! field. Unlike the relational checks in `config::validate`, results from
//! every field are collected so the user sees all format problems at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::model::RawFrontDoorConfig;

static FRONT_DOOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z][-0-9a-zA-Z]{3,61}[0-9a-zA-Z]$").unwrap());

static BACKEND_POOL_ROUTING_RULE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z][-0-9a-zA-Z]{1,88}[0-9a-zA-Z]$").unwrap());

static BASE64_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$")
        .unwrap()
});

/// Outcome of validating a single field.
///
/// `warnings` is part of the per-field validator contract; none of the
/// validators in this module currently produce any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl FieldReport {
    fn error(message: String) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![message],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Front door names: 5-63 characters, letters, numbers and hyphens, not
/// starting or ending with a hyphen.
pub fn front_door_name(value: &str, key: &str) -> FieldReport {
    if FRONT_DOOR_NAME.is_match(value) {
        return FieldReport::default();
    }
    FieldReport::error(format!(
        "{key:?} must be between 5 and 63 characters in length and begin with a letter or number, end with a letter or number and may contain only letters, numbers or hyphens."
    ))
}

/// Names of frontend endpoints, routing rules, backend pools and their
/// settings blocks: 3-90 characters with the same charset rules.
pub fn backend_pool_routing_rule_name(value: &str, key: &str) -> FieldReport {
    if BACKEND_POOL_ROUTING_RULE_NAME.is_match(value) {
        return FieldReport::default();
    }
    FieldReport::error(format!(
        "{key:?} must be between 1 and 90 characters in length and begin with a letter or number, end with a letter or number and may contain only letters, numbers or hyphens."
    ))
}

/// Custom block response bodies must be padded base64.
pub fn custom_block_response_body(value: &str, key: &str) -> FieldReport {
    if BASE64_BODY.is_match(value) {
        return FieldReport::default();
    }
    FieldReport::error(format!(
        "{key:?} contains invalid characters, {key:?} must be a valid base64 string."
    ))
}

/// Rejects values made only of whitespace.
pub fn no_empty_strings(value: &str, key: &str) -> FieldReport {
    if value.trim().is_empty() {
        return FieldReport::error(format!("{key:?} must not be empty"));
    }
    FieldReport::default()
}

/// Run the format validators over every named field of a configuration.
///
/// Returns all errors found, in field order.
pub fn check_field_formats(cfg: &RawFrontDoorConfig) -> Vec<String> {
    let mut reports = Vec::new();

    if let Some(name) = cfg.name.as_deref() {
        reports.push(front_door_name(name, "name"));
    }

    for (i, fe) in cfg.frontend_endpoint.iter().enumerate() {
        let key = format!("frontend_endpoint.{i}.name");
        reports.push(backend_pool_routing_rule_name(&fe.name, &key));
        if let Some(host) = fe.host_name.as_deref() {
            let key = format!("frontend_endpoint.{i}.host_name");
            reports.push(no_empty_strings(host, &key));
        }
    }

    let names = cfg
        .routing_rule
        .iter()
        .map(|b| ("routing_rule", &b.name))
        .enumerate()
        .chain(cfg.backend_pool.iter().map(|b| ("backend_pool", &b.name)).enumerate())
        .chain(
            cfg.backend_pool_load_balancing
                .iter()
                .map(|b| ("backend_pool_load_balancing", &b.name))
                .enumerate(),
        )
        .chain(
            cfg.backend_pool_health_probe
                .iter()
                .map(|b| ("backend_pool_health_probe", &b.name))
                .enumerate(),
        );

    for (i, (section, name)) in names {
        let key = format!("{section}.{i}.name");
        reports.push(backend_pool_routing_rule_name(name, &key));
    }

    reports.into_iter().flat_map(|r| r.errors).collect()
}
