//! Run configuration read from the environment.
//!
//! Gameplay knobs are compile-time constants; only the seed and the log
//! destination come from the environment:
//!
//! - `LANE_HOPPER_SEED`: RNG seed (default: derived from the clock)
//! - `LANE_HOPPER_LOG_PATH`: append log records to this file (default: no logging)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), clock_seed)
    }

    /// `fallback_seed` runs when the seed variable is missing or unparsable.
    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        fallback_seed: impl FnOnce() -> u32,
    ) -> Self {
        let seed = lookup("LANE_HOPPER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(fallback_seed);

        let log_path = lookup("LANE_HOPPER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { seed, log_path }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_seed_and_log_path() {
        let config = RunConfig::from_lookup(
            lookup(&[
                ("LANE_HOPPER_SEED", " 4242 "),
                ("LANE_HOPPER_LOG_PATH", "/tmp/lane-hopper.log"),
            ]),
            || 7,
        );
        assert_eq!(config.seed, 4242);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/lane-hopper.log")));
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let config = RunConfig::from_lookup(lookup(&[("LANE_HOPPER_LOG_PATH", "  ")]), || 7);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn bad_seed_falls_back() {
        let config =
            RunConfig::from_lookup(lookup(&[("LANE_HOPPER_SEED", "not-a-number")]), || 7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_path, None);

        let config = RunConfig::from_lookup(lookup(&[("LANE_HOPPER_SEED", "-3")]), || 7);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn missing_seed_falls_back() {
        let config = RunConfig::from_lookup(lookup(&[]), || 31);
        assert_eq!(config.seed, 31);
    }
}
