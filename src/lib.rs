// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate, load_from_path};
use crate::config::model::FrontDoorConfig;
use crate::config::validate::validate_frontdoor_settings;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config path resolution
/// - loading + field format checks (skipped with `--relational-only`)
/// - relational validation
/// - optional topology summary
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    info!(path = %config_path.display(), "validating configuration");

    let cfg = if args.relational_only {
        let raw = load_from_path(&config_path)
            .with_context(|| format!("loading config file at {:?}", config_path))?;
        validate_frontdoor_settings(&raw)?;
        FrontDoorConfig::new_unchecked(raw)
    } else {
        load_and_validate(&config_path)?
    };

    println!("{}: configuration is valid", config_path.display());
    if args.print {
        print_summary(&cfg);
    }
    Ok(())
}

/// Topology summary: endpoints, rules and where they send traffic.
fn print_summary(cfg: &FrontDoorConfig) {
    println!();
    if let Some(name) = cfg.name.as_deref() {
        println!("front door: {name}");
    }

    println!("frontend endpoints ({}):", cfg.frontend_endpoint.len());
    for fe in cfg.frontend_endpoint.iter() {
        println!("  - {}", fe.name);
        if let Some(host) = fe.host_name.as_deref() {
            println!("      host_name: {host}");
        }
        if let Some(https) = fe.custom_https_configuration.as_ref() {
            println!("      custom https: {}", https.certificate_source);
        }
    }

    println!("routing rules ({}):", cfg.routing_rule.len());
    for rr in cfg.routing_rule.iter() {
        println!("  - {}", rr.name);
        println!("      frontend_endpoints: {:?}", rr.frontend_endpoints);
        if let Some(fc) = rr.forwarding_configuration.as_ref() {
            println!("      forward -> {}", fc.backend_pool_name);
        }
        if rr.redirect_configuration.is_some() {
            println!("      redirect");
        }
        if !rr.enabled {
            println!("      enabled: false");
        }
    }

    println!("backend pools ({}):", cfg.backend_pool.len());
    for bp in cfg.backend_pool.iter() {
        let used_by: Vec<&str> = cfg
            .rules_forwarding_to(&bp.name)
            .map(|rr| rr.name.as_str())
            .collect();
        println!("  - {}", bp.name);
        println!("      load_balancing_name: {}", bp.load_balancing_name);
        println!("      health_probe_name: {}", bp.health_probe_name);
        if !used_by.is_empty() {
            println!("      used by: {:?}", used_by);
        }
    }

    debug!("summary printed");
}
