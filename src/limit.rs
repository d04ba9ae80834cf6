//! Page size sanitizing
//!
//! Requested page sizes come straight from clients. [`sanitize_limit`] turns
//! any request into a usable size; [`LimitPolicy`] adds a configurable
//! default and an optional upper bound on top of it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Page size used when the client does not ask for one
pub const DEFAULT_LIMIT: u64 = 20;

/// Default the page size when absent, clamp it to at least 1 otherwise
///
/// No upper bound is applied here.
///
/// ```
/// use solidafy_cursor::limit::sanitize_limit;
///
/// assert_eq!(sanitize_limit(None), 20);
/// assert_eq!(sanitize_limit(Some(-10)), 1);
/// assert_eq!(sanitize_limit(Some(50)), 50);
/// ```
pub fn sanitize_limit(requested: Option<i64>) -> u64 {
    match requested {
        None => DEFAULT_LIMIT,
        Some(n) if n < 1 => 1,
        Some(n) => n as u64,
    }
}

/// Float variant of [`sanitize_limit`] for loosely typed inputs
///
/// `-0.0`, negatives and NaN clamp to 1; fractional sizes are truncated.
pub fn sanitize_limit_f64(requested: Option<f64>) -> u64 {
    match requested {
        None => DEFAULT_LIMIT,
        Some(n) if n.is_nan() || n < 1.0 => 1,
        Some(n) => n as u64,
    }
}

/// Default and maximum page size for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitPolicy {
    /// Page size when none is requested
    #[serde(default = "default_limit")]
    pub default: u64,

    /// Largest page size handed out (unbounded if unset)
    #[serde(default)]
    pub max: Option<u64>,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self {
            default: DEFAULT_LIMIT,
            max: None,
        }
    }
}

impl LimitPolicy {
    /// Create a policy with the given default and no maximum
    pub fn new(default: u64) -> Self {
        Self { default, max: None }
    }

    /// Set the maximum page size
    #[must_use]
    pub fn with_max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    /// Resolve a requested page size under this policy
    pub fn apply(&self, requested: Option<i64>) -> u64 {
        let limit = match requested {
            None => self.default,
            Some(_) => sanitize_limit(requested),
        };

        match self.max {
            Some(max) if limit > max => {
                warn!(requested = limit, max, "Page size capped");
                max
            }
            _ => limit,
        }
    }

    /// Check the policy is self-consistent
    pub fn validate(&self) -> Result<()> {
        if self.default < 1 {
            return Err(Error::invalid_value("limits.default", "must be at least 1"));
        }
        if let Some(max) = self.max {
            if max < self.default {
                return Err(Error::invalid_value(
                    "limits.max",
                    format!("must be >= default ({}), got {max}", self.default),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(-10 ; "negative ten")]
    #[test_case(-1 ; "negative one")]
    #[test_case(0 ; "zero")]
    #[test_case(i64::MIN ; "minimum")]
    fn test_sanitize_clamps_to_one(requested: i64) {
        assert_eq!(sanitize_limit(Some(requested)), 1);
    }

    #[test_case(1)]
    #[test_case(10)]
    #[test_case(1000)]
    fn test_sanitize_passes_positive_through(requested: i64) {
        assert_eq!(sanitize_limit(Some(requested)), requested as u64);
    }

    #[test]
    fn test_sanitize_default() {
        assert_eq!(sanitize_limit(None), 20);
        assert_eq!(sanitize_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_sanitize_no_upper_bound() {
        assert_eq!(sanitize_limit(Some(i64::MAX)), i64::MAX as u64);
    }

    #[test_case(-0.0 ; "negative zero")]
    #[test_case(0.0 ; "zero")]
    #[test_case(-3.5 ; "negative fraction")]
    #[test_case(f64::NAN ; "nan")]
    fn test_sanitize_f64_clamps_to_one(requested: f64) {
        assert_eq!(sanitize_limit_f64(Some(requested)), 1);
    }

    #[test]
    fn test_sanitize_f64() {
        assert_eq!(sanitize_limit_f64(None), 20);
        assert_eq!(sanitize_limit_f64(Some(10.0)), 10);
        assert_eq!(sanitize_limit_f64(Some(7.9)), 7);
    }

    #[test]
    fn test_policy_default() {
        let policy = LimitPolicy::default();
        assert_eq!(policy.apply(None), 20);
        assert_eq!(policy.apply(Some(0)), 1);
        assert_eq!(policy.apply(Some(500)), 500);
    }

    #[test]
    fn test_policy_custom_default_and_max() {
        let policy = LimitPolicy::new(50).with_max(100);
        assert_eq!(policy.apply(None), 50);
        assert_eq!(policy.apply(Some(-5)), 1);
        assert_eq!(policy.apply(Some(75)), 75);
        assert_eq!(policy.apply(Some(101)), 100);
    }

    #[test]
    fn test_policy_validate() {
        assert!(LimitPolicy::default().validate().is_ok());
        assert!(LimitPolicy::new(20).with_max(20).validate().is_ok());

        let err = LimitPolicy::new(0).validate().unwrap_err();
        assert!(err.to_string().contains("limits.default"));

        let err = LimitPolicy::new(50).with_max(10).validate().unwrap_err();
        assert!(err.to_string().contains("limits.max"));
    }

    #[test]
    fn test_policy_deserialize_defaults() {
        let policy: LimitPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, LimitPolicy::default());

        let policy: LimitPolicy = serde_json::from_str(r#"{"max": 200}"#).unwrap();
        assert_eq!(policy.default, 20);
        assert_eq!(policy.max, Some(200));
    }
}
