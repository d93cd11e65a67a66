use crate::capability::MotionPolicy;
use crate::telemetry::LogLevel;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.3;
pub const DEFAULT_NAV_LOOKAHEAD_PX: f64 = 100.0;
pub const DEFAULT_LOW_END_CORES: u32 = 2;
pub const DEFAULT_MOBILE_LOW_END_REDUCES_MOTION: bool = true;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const NAV_LOOKAHEAD_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const LOW_END_CORES_BOUNDS: (u32, u32) = (1, 64);

/// Tunables baked in at build time. Trunk forwards the shell environment to
/// `cargo build`, so `PORTFOLIO_*` variables set there end up here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub reveal_threshold: f64,
    pub nav_lookahead_px: f64,
    pub motion_policy: MotionPolicy,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            nav_lookahead_px: DEFAULT_NAV_LOOKAHEAD_PX,
            motion_policy: MotionPolicy {
                low_end_cores: DEFAULT_LOW_END_CORES,
                mobile_low_end_reduces_motion: DEFAULT_MOBILE_LOW_END_REDUCES_MOTION,
            },
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_REVEAL_THRESHOLD"),
            option_env!("PORTFOLIO_NAV_LOOKAHEAD_PX"),
            option_env!("PORTFOLIO_LOW_END_CORES"),
            option_env!("PORTFOLIO_MOBILE_LOW_END_REDUCES_MOTION"),
            option_env!("PORTFOLIO_LOG_LEVEL"),
        )
    }

    fn from_values(
        reveal_threshold: Option<&str>,
        nav_lookahead_px: Option<&str>,
        low_end_cores: Option<&str>,
        mobile_low_end_reduces_motion: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            reveal_threshold: parse_f64_with_bounds(
                reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            nav_lookahead_px: parse_f64_with_bounds(
                nav_lookahead_px,
                DEFAULT_NAV_LOOKAHEAD_PX,
                NAV_LOOKAHEAD_PX_BOUNDS,
            ),
            motion_policy: MotionPolicy {
                low_end_cores: parse_u32_with_bounds(
                    low_end_cores,
                    DEFAULT_LOW_END_CORES,
                    LOW_END_CORES_BOUNDS,
                ),
                mobile_low_end_reduces_motion: parse_bool(
                    mobile_low_end_reduces_motion,
                    DEFAULT_MOBILE_LOW_END_REDUCES_MOTION,
                ),
            },
            log_level: parse_log_level(log_level, DEFAULT_LOG_LEVEL),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds(value: Option<&str>, default: f64, bounds: (f64, f64)) -> f64 {
    non_empty(value)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(value: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    non_empty(value)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match non_empty(value).map(str::to_ascii_lowercase).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match non_empty(value).map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_use_defaults() {
        let config = SiteConfig::from_values(None, None, None, None, None);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn valid_values_are_trimmed_and_applied() {
        let config = SiteConfig::from_values(
            Some(" 0.5 "),
            Some("64"),
            Some("4"),
            Some("off"),
            Some("DEBUG"),
        );

        assert_eq!(config.reveal_threshold, 0.5);
        assert_eq!(config.nav_lookahead_px, 64.0);
        assert_eq!(config.motion_policy.low_end_cores, 4);
        assert!(!config.motion_policy.mobile_low_end_reduces_motion);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let config = SiteConfig::from_values(
            Some("1.5"),
            Some("-10"),
            Some("0"),
            Some("maybe"),
            Some("trace"),
        );

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        assert_eq!(
            parse_f64_with_bounds(Some("NaN"), 0.3, REVEAL_THRESHOLD_BOUNDS),
            0.3
        );
    }
}
