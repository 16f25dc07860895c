//! Token issuance and freshness validation.
//!
//! A token is the current UTC time formatted to minute precision and
//! prefixed with the bearer scheme label. Validation recomputes freshness
//! purely from the claimed timestamp versus the verifier's clock; no
//! issued-token state is kept anywhere.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::TokenParseError;

/// Scheme label prepended to every issued token.
pub const SCHEME_PREFIX: &str = "Bearer ";

/// Fixed minute-precision timestamp pattern carried by the token.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Token validation settings.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Maximum allowed age of a claimed timestamp (default: 1 hour)
    pub tolerance: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            tolerance: Duration::from_secs(3600),
        }
    }
}

impl TokenConfig {
    /// Create a config with a custom tolerance window.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Issue a token for the given instant.
///
/// The timestamp is truncated to minute precision by the format pattern,
/// so a token stays valid for its issuing minute plus the full tolerance
/// window measured from that truncated minute.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 42).unwrap();
/// assert_eq!(clock_auth::issue(now), "Bearer 2024-01-01T10:00");
/// ```
#[must_use]
pub fn issue(now: DateTime<Utc>) -> String {
    format!("{SCHEME_PREFIX}{}", now.format(TIMESTAMP_FORMAT))
}

/// Parse the claimed timestamp out of a token header.
///
/// A missing `Bearer ` prefix is tolerated; stripping is a no-op when the
/// prefix is absent.
///
/// # Errors
///
/// Returns [`TokenParseError::InvalidTimestamp`] if the remainder does not
/// match the fixed pattern.
pub fn parse(header: &str) -> Result<NaiveDateTime, TokenParseError> {
    let raw = header.strip_prefix(SCHEME_PREFIX).unwrap_or(header);
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| TokenParseError::InvalidTimestamp(raw.to_string()))
}

/// Check a token header against the verifier's clock.
///
/// Valid iff the claimed timestamp parses and `now - claimed`, in whole
/// seconds, falls in `[0, tolerance]`. A claim in the future (negative
/// difference) is rejected. Parse failures fail closed to `false`; this
/// function never returns an error.
#[must_use]
pub fn validate(header: &str, now: DateTime<Utc>, config: &TokenConfig) -> bool {
    let Ok(claimed) = parse(header) else {
        return false;
    };
    let tolerance = i64::try_from(config.tolerance.as_secs()).unwrap_or(i64::MAX);
    let diff = now.naive_utc().signed_duration_since(claimed).num_seconds();
    (0..=tolerance).contains(&diff)
}
