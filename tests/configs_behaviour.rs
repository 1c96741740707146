// tests/configs_behaviour.rs

use std::error::Error;
use std::path::PathBuf;

use frontdoor_validate::config::{load_and_validate, load_from_path, validate_frontdoor_settings};
use frontdoor_validate::errors::{FrontDoorError, Violation};
use frontdoor_validate::types::CertificateSource;

type TestResult = Result<(), Box<dyn Error>>;

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs").join(name)
}

#[test]
fn forwarding_toml_is_valid() -> TestResult {
    let cfg = load_and_validate(config_path("forwarding.toml"))?;

    assert_eq!(cfg.name.as_deref(), Some("contoso-front-door"));
    assert_eq!(cfg.frontend_endpoint.len(), 2);
    assert_eq!(cfg.routing_rule.len(), 2);

    let https = cfg.frontend_endpoint[1]
        .custom_https_configuration
        .as_ref()
        .ok_or("missing https block")?;
    assert_eq!(https.certificate_source, CertificateSource::AzureKeyVault);

    let users: Vec<&str> = cfg
        .rules_forwarding_to("contoso-origins")
        .map(|rr| rr.name.as_str())
        .collect();
    assert_eq!(users, vec!["forward-all"]);
    assert!(cfg.routing_rule[0].enabled);

    Ok(())
}

#[test]
fn dangling_frontend_toml_reports_first_unknown_endpoint() -> TestResult {
    match load_and_validate(config_path("dangling-frontend.toml")) {
        Err(FrontDoorError::Violation(v)) => {
            assert_eq!(
                v,
                Violation::UnknownFrontendEndpoint {
                    rule: "forward-all".to_string(),
                    frontend_endpoint: "legacy-frontend".to_string(),
                }
            );
            Ok(())
        }
        other => Err(format!("unexpected result: {other:?}").into()),
    }
}

#[test]
fn validating_twice_gives_the_same_verdict() -> TestResult {
    for name in ["forwarding.toml", "dangling-frontend.toml"] {
        let raw = load_from_path(config_path(name))?;
        assert_eq!(validate_frontdoor_settings(&raw), validate_frontdoor_settings(&raw));
    }
    Ok(())
}
