use proptest::prelude::*;
use frontdoor_validate::config::{RawFrontDoorConfig, validate_frontdoor_settings};
use frontdoor_validate::errors::{Violation, ViolationKind};
use frontdoor_validate_test_utils::builders::{
    BackendPoolBuilder, ConfigBuilder, FrontendEndpointBuilder, RoutingRuleBuilder,
};

// A topology where every reference resolves: `fe_count` endpoints, one pool,
// and one forwarding rule per entry of `rule_frontends`, each listing the
// endpoints at the given (wrapped) indices.
fn valid_config_strategy() -> impl Strategy<Value = RawFrontDoorConfig> {
    (1..6usize).prop_flat_map(|fe_count| {
        proptest::collection::vec(proptest::collection::vec(any::<usize>(), 1..4), 0..5).prop_map(
            move |rule_frontends| {
                let mut builder = ConfigBuilder::new()
                    .with_pool(
                        BackendPoolBuilder::new("bp1")
                            .load_balancing("lb1")
                            .health_probe("hp1")
                            .build(),
                    )
                    .with_load_balancing("lb1")
                    .with_health_probe("hp1");
                for i in 0..fe_count {
                    builder = builder.with_frontend(FrontendEndpointBuilder::new(&format!("fe{i}")).build());
                }
                for (r, picks) in rule_frontends.into_iter().enumerate() {
                    let mut rule = RoutingRuleBuilder::new(&format!("rr{r}")).forward_to("bp1");
                    for p in picks {
                        rule = rule.frontend(&format!("fe{}", p % fe_count));
                    }
                    builder = builder.with_rule(rule.build());
                }
                builder.build_raw()
            },
        )
    })
}

proptest! {
    #[test]
    fn resolvable_topologies_are_valid(cfg in valid_config_strategy()) {
        prop_assert_eq!(validate_frontdoor_settings(&cfg), Ok(()));
    }

    #[test]
    fn validation_is_idempotent(cfg in valid_config_strategy(), drop_frontends in any::<bool>()) {
        let mut cfg = cfg;
        if drop_frontends {
            cfg.frontend_endpoint.clear();
        }
        let first = validate_frontdoor_settings(&cfg);
        let second = validate_frontdoor_settings(&cfg);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn conflicting_rule_fails_regardless_of_position(
        cfg in valid_config_strategy(),
        position in any::<usize>(),
    ) {
        let mut cfg = cfg;
        let at = position % (cfg.routing_rule.len() + 1);
        cfg.routing_rule.insert(
            at,
            RoutingRuleBuilder::new("conflict")
                .frontend("fe0")
                .redirect()
                .forward_to("bp1")
                .build(),
        );
        let result = validate_frontdoor_settings(&cfg);
        prop_assert_eq!(
            result.map_err(|v| v.kind()),
            Err(ViolationKind::ConflictingConfigurationBlocks)
        );
    }

    #[test]
    fn first_unknown_frontend_is_reported(
        known in 0..4usize,
        unknown in proptest::collection::vec("[a-z]{3,8}", 1..4),
    ) {
        let mut rule = RoutingRuleBuilder::new("rr1").forward_to("bp1");
        for _ in 0..known {
            rule = rule.frontend("fe1");
        }
        for name in unknown.iter() {
            rule = rule.frontend(&format!("missing-{name}"));
        }
        let cfg = ConfigBuilder::minimal()
            .map_rule("rr1", |rr| *rr = rule.build())
            .build_raw();

        prop_assert_eq!(
            validate_frontdoor_settings(&cfg),
            Err(Violation::UnknownFrontendEndpoint {
                rule: "rr1".to_string(),
                frontend_endpoint: format!("missing-{}", unknown[0]),
            })
        );
    }
}
