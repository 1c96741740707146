// tests/field_formats.rs

use frontdoor_validate::config::fields::{
    backend_pool_routing_rule_name, custom_block_response_body, front_door_name, no_empty_strings,
};
use frontdoor_validate::config::{FrontDoorConfig, check_field_formats};
use frontdoor_validate::errors::FrontDoorError;
use frontdoor_validate_test_utils::builders::{ConfigBuilder, FrontendEndpointBuilder};

#[test]
fn front_door_name_accepts_letters_digits_and_hyphens() {
    for name in ["abcde", "my-front-door", "0door9", "a".repeat(63).as_str()] {
        assert!(front_door_name(name, "name").is_ok(), "{name} should be valid");
    }
}

#[test]
fn front_door_name_rejects_bad_shapes() {
    for name in ["abcd", "-abcde", "abcde-", "ab_cde", "a".repeat(64).as_str(), ""] {
        let report = front_door_name(name, "name");
        assert_eq!(report.errors.len(), 1, "{name} should be invalid");
        assert!(report.errors[0].starts_with("\"name\" must be between 5 and 63 characters"));
        assert!(report.warnings.is_empty());
    }
}

#[test]
fn block_names_allow_up_to_ninety_characters() {
    assert!(backend_pool_routing_rule_name("fe1", "k").is_ok());
    assert!(backend_pool_routing_rule_name(&"x".repeat(90), "k").is_ok());
    assert!(!backend_pool_routing_rule_name(&"x".repeat(91), "k").is_ok());
    assert!(!backend_pool_routing_rule_name("ab", "k").is_ok());
    assert!(!backend_pool_routing_rule_name("rule.one", "k").is_ok());
}

#[test]
fn response_body_must_be_base64() {
    assert!(custom_block_response_body("PGh0bWw+PC9odG1sPg==", "body").is_ok());
    assert!(custom_block_response_body("YWJj", "body").is_ok());

    let report = custom_block_response_body("not base64!", "body");
    assert_eq!(
        report.errors,
        vec![
            "\"body\" contains invalid characters, \"body\" must be a valid base64 string."
                .to_string()
        ]
    );
    assert!(!custom_block_response_body("YWJ", "body").is_ok());
}

#[test]
fn whitespace_only_strings_are_empty() {
    assert!(no_empty_strings("host.example.com", "host_name").is_ok());
    let report = no_empty_strings(" \t\n", "host_name");
    assert_eq!(report.errors, vec!["\"host_name\" must not be empty".to_string()]);
}

#[test]
fn field_errors_are_collected_with_indexed_keys() {
    let cfg = ConfigBuilder::minimal()
        .name("fd")
        .with_frontend(FrontendEndpointBuilder::new("fe_2").host_name("  ").build())
        .build_raw();

    let errors = check_field_formats(&cfg);
    assert_eq!(errors.len(), 3);
    assert!(no_empty_strings("  ", "k").warnings.is_empty());
    assert!(errors[0].starts_with("\"name\""));
    assert!(errors[1].starts_with("\"frontend_endpoint.1.name\""));
    assert!(errors[2].starts_with("\"frontend_endpoint.1.host_name\""));
}

#[test]
fn settings_block_names_are_checked() {
    let cfg = ConfigBuilder::minimal().with_health_probe("hp!").build_raw();
    let errors = check_field_formats(&cfg);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("\"backend_pool_health_probe.1.name\""));
}

#[test]
fn field_errors_block_conversion_before_relational_checks() {
    // "rr!" is both badly formatted and, with no frontends, relationally broken.
    let mut raw = ConfigBuilder::minimal().build_raw();
    raw.frontend_endpoint.clear();
    raw.routing_rule[0].name = "rr!".to_string();

    match FrontDoorConfig::try_from(raw) {
        Err(FrontDoorError::InvalidFields(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("routing_rule.0.name"));
        }
        Err(e) => panic!("Expected InvalidFields, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
