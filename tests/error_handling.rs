// tests/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use frontdoor_validate::config::{load_and_validate, load_from_str};
use frontdoor_validate::errors::{FrontDoorError, Violation, ViolationKind};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_dangling_backend_pool_returns_violation() {
    let file = write_config(
        r#"
[[frontend_endpoint]]
name = "fe1"

[[routing_rule]]
name = "rr1"
frontend_endpoints = ["fe1"]
[routing_rule.forwarding_configuration]
backend_pool_name = "bp-missing"

[[backend_pool]]
name = "bp1"
"#,
    );

    match load_and_validate(file.path()) {
        Err(FrontDoorError::Violation(v)) => {
            assert_eq!(v.kind(), ViolationKind::DanglingReference);
            assert_eq!(v.subject(), Some("rr1"));
            assert_eq!(v.dangling_name(), Some("bp-missing"));
        }
        Err(e) => panic!("Expected Violation, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_violation_message_is_surfaced_verbatim() {
    let file = write_config("name = \"my-front-door\"\n");

    let err = load_and_validate(file.path()).unwrap_err();
    assert_eq!(err.to_string(), Violation::NoFrontendEndpoints.to_string());
    assert_eq!(
        err.to_string(),
        r#""frontend_endpoint": must have at least one "frontend_endpoint" defined, found 0"#
    );
}

#[test]
fn test_invalid_toml_returns_toml_error() {
    let file = write_config("[[frontend_endpoint]\nname = ");

    match load_and_validate(file.path()) {
        Err(FrontDoorError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match load_and_validate(&path) {
        Err(FrontDoorError::IoError(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected IoError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_block_without_name_is_a_parse_error() {
    let result = load_from_str(
        r#"
[[backend_pool]]
load_balancing_name = "lb1"
"#,
    );
    assert!(matches!(result, Err(FrontDoorError::TomlError(_))));
}

#[test]
fn test_https_block_while_disabled_from_toml() {
    let file = write_config(
        r#"
[[frontend_endpoint]]
name = "fe1"
custom_https_provisioning_enabled = false
[frontend_endpoint.custom_https_configuration]
certificate_source = "FrontDoor"
"#,
    );

    match load_and_validate(file.path()) {
        Err(FrontDoorError::Violation(Violation::HttpsConfigurationWhileDisabled {
            frontend_endpoint,
        })) => assert_eq!(frontend_endpoint, "fe1"),
        Err(e) => panic!("Expected HttpsConfigurationWhileDisabled, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
