//! Property-based tests for the clock token.
//!
//! Tests validate:
//! - Freshly issued tokens always validate at their issuing instant
//! - The tolerance window boundary is exact in whole seconds
//! - Future claims and unparseable headers always fail closed

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use clock_auth::{TokenConfig, issue, parse, validate};
use proptest::prelude::*;

// Strategy for generating instants between 2000-01-01 and 2100-01-01
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..4_102_444_800i64)
        .prop_filter_map("timestamp out of chrono range", |secs| {
            DateTime::<Utc>::from_timestamp(secs, 0)
        })
}

// Strategy for generating tolerance windows up to a day
fn tolerance_strategy() -> impl Strategy<Value = u64> {
    1u64..86_400
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A token issued at `t` validates at `now = t` for any tolerance.
    #[test]
    fn prop_issue_then_validate_at_issuance(
        t in instant_strategy(),
        tolerance in tolerance_strategy(),
    ) {
        let config = TokenConfig::default().with_tolerance(Duration::from_secs(tolerance));
        prop_assert!(validate(&issue(t), t, &config));
    }

    /// Exactly `tolerance` seconds past the truncated minute is still
    /// valid; one second more is not.
    #[test]
    fn prop_tolerance_boundary_is_exact(
        t in instant_strategy(),
        tolerance in tolerance_strategy(),
    ) {
        let config = TokenConfig::default().with_tolerance(Duration::from_secs(tolerance));
        let token = issue(t);
        let claimed = parse(&token).unwrap().and_utc();

        let at_boundary = claimed + TimeDelta::seconds(tolerance as i64);
        let past_boundary = at_boundary + TimeDelta::seconds(1);

        prop_assert!(validate(&token, at_boundary, &config));
        prop_assert!(!validate(&token, past_boundary, &config));
    }

    /// A verifier clock behind the claimed minute always rejects.
    #[test]
    fn prop_future_claim_rejected(
        t in instant_strategy(),
        behind_secs in 1i64..86_400,
    ) {
        let token = issue(t);
        let claimed = parse(&token).unwrap().and_utc();
        let now = claimed - TimeDelta::seconds(behind_secs);

        prop_assert!(!validate(&token, now, &TokenConfig::default()));
    }

    /// Headers that do not carry a minute-precision timestamp never
    /// validate, whatever the clock says.
    #[test]
    fn prop_unparseable_header_fails_closed(
        header in "[a-zA-Z !:/+-]{0,40}",
        now in instant_strategy(),
    ) {
        prop_assert!(parse(&header).is_err());
        prop_assert!(!validate(&header, now, &TokenConfig::default()));
    }

    /// Parsing an issued token recovers the minute-truncated instant.
    #[test]
    fn prop_parse_recovers_truncated_minute(t in instant_strategy()) {
        let claimed = parse(&issue(t)).unwrap().and_utc();
        let within_minute = t.signed_duration_since(claimed).num_seconds();

        prop_assert!((0..60).contains(&within_minute));
    }
}
