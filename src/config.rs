//! Session configuration from environment variables.
//!
//! Every setting has a default; malformed values fall back to it.
//!
//! - `STARSHIP_TICK_MS`: tick interval in milliseconds (default 100)
//! - `STARSHIP_SEED`: scene seed (default: derived from the clock)
//! - `STARSHIP_STARS_MIN` / `STARSHIP_STARS_MAX`: star count range (default 100..=200,
//!   capped at 10 000)
//! - `STARSHIP_SPRITE_DIR`: directory holding the ship frames (default `sprites`)
//! - `STARSHIP_FIRE_SPEED`: projectile speed in rows per tick, fired upward (default 0.3,
//!   at least 0.05)
//! - `STARSHIP_LOG_PATH`: log file; logging is off when unset
//! - `STARSHIP_BELL_DISABLED`: `1` or `true` silences the bell

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::SceneSettings;
use crate::types::{
    DEFAULT_FIRE_ROWS_SPEED, DEFAULT_STARS_MAX, DEFAULT_STARS_MIN, MIN_FIRE_SPEED, STARS_LIMIT,
    TICK_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_ms: u64,
    pub seed: u32,
    pub stars_min: u32,
    pub stars_max: u32,
    pub sprite_dir: PathBuf,
    /// Rows per tick; always fired upward.
    pub fire_speed: f64,
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS as u64,
            seed: clock_seed(),
            stars_min: DEFAULT_STARS_MIN,
            stars_max: DEFAULT_STARS_MAX,
            sprite_dir: PathBuf::from("sprites"),
            fire_speed: -DEFAULT_FIRE_ROWS_SPEED,
            log_path: None,
            bell: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let tick_ms = parsed(&lookup, "STARSHIP_TICK_MS")
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(defaults.tick_ms);
        let seed = parsed(&lookup, "STARSHIP_SEED").unwrap_or(defaults.seed);

        let stars_min = parsed(&lookup, "STARSHIP_STARS_MIN")
            .unwrap_or(defaults.stars_min)
            .min(STARS_LIMIT);
        let stars_max = parsed(&lookup, "STARSHIP_STARS_MAX")
            .unwrap_or(defaults.stars_max)
            .min(STARS_LIMIT);
        let (stars_min, stars_max) = if stars_min <= stars_max {
            (stars_min, stars_max)
        } else {
            (stars_max, stars_min)
        };

        let sprite_dir = non_empty(lookup("STARSHIP_SPRITE_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.sprite_dir);

        let fire_speed = parsed(&lookup, "STARSHIP_FIRE_SPEED")
            .filter(|v: &f64| v.is_finite() && *v >= MIN_FIRE_SPEED)
            .unwrap_or(defaults.fire_speed);

        let log_path = non_empty(lookup("STARSHIP_LOG_PATH")).map(PathBuf::from);

        let bell = !lookup("STARSHIP_BELL_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            tick_ms,
            seed,
            stars_min,
            stars_max,
            sprite_dir,
            fire_speed,
            log_path,
            bell,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn scene(&self) -> SceneSettings {
        SceneSettings {
            stars_min: self.stars_min,
            stars_max: self.stars_max,
            fire_velocity: (-self.fire_speed, 0.0),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[]);
        assert_eq!(c.tick_ms, 100);
        assert_eq!(c.tick_interval(), Duration::from_millis(100));
        assert_eq!((c.stars_min, c.stars_max), (100, 200));
        assert_eq!(c.sprite_dir, PathBuf::from("sprites"));
        assert_eq!(c.log_path, None);
        assert!(c.bell);
        assert!(c.fire_speed > 0.0);
    }

    #[test]
    fn reads_every_key() {
        let c = config(&[
            ("STARSHIP_TICK_MS", "50"),
            ("STARSHIP_SEED", "1234"),
            ("STARSHIP_STARS_MIN", "3"),
            ("STARSHIP_STARS_MAX", "7"),
            ("STARSHIP_SPRITE_DIR", "art"),
            ("STARSHIP_FIRE_SPEED", "1.5"),
            ("STARSHIP_LOG_PATH", "/tmp/starship.log"),
            ("STARSHIP_BELL_DISABLED", "TRUE"),
        ]);
        assert_eq!(c.tick_ms, 50);
        assert_eq!(c.seed, 1234);
        assert_eq!((c.stars_min, c.stars_max), (3, 7));
        assert_eq!(c.sprite_dir, PathBuf::from("art"));
        assert_eq!(c.fire_speed, 1.5);
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/starship.log")));
        assert!(!c.bell);
        assert_eq!(c.scene().fire_velocity, (-1.5, 0.0));
    }

    #[test]
    fn malformed_values_fall_back() {
        let c = config(&[
            ("STARSHIP_TICK_MS", "0"),
            ("STARSHIP_SEED", "abc"),
            ("STARSHIP_FIRE_SPEED", "-2"),
            ("STARSHIP_LOG_PATH", "   "),
            ("STARSHIP_SPRITE_DIR", ""),
        ]);
        assert_eq!(c.tick_ms, 100);
        assert_eq!(c.fire_speed, -DEFAULT_FIRE_ROWS_SPEED);
        assert_eq!(c.log_path, None);
        assert_eq!(c.sprite_dir, PathBuf::from("sprites"));
    }

    #[test]
    fn star_bounds_are_capped() {
        let c = config(&[
            ("STARSHIP_STARS_MIN", "3000000000"),
            ("STARSHIP_STARS_MAX", "4294967295"),
        ]);
        assert_eq!((c.stars_min, c.stars_max), (STARS_LIMIT, STARS_LIMIT));

        let c = config(&[("STARSHIP_STARS_MAX", "3000000000")]);
        assert_eq!((c.stars_min, c.stars_max), (DEFAULT_STARS_MIN, STARS_LIMIT));
    }

    #[test]
    fn crawling_fire_speed_falls_back() {
        for raw in ["1e-9", "0", "0.049"] {
            let c = config(&[("STARSHIP_FIRE_SPEED", raw)]);
            assert_eq!(c.fire_speed, -DEFAULT_FIRE_ROWS_SPEED, "{raw}");
        }
        let c = config(&[("STARSHIP_FIRE_SPEED", "0.05")]);
        assert_eq!(c.fire_speed, MIN_FIRE_SPEED);
    }

    #[test]
    fn swapped_star_bounds_are_reordered() {
        let c = config(&[("STARSHIP_STARS_MIN", "9"), ("STARSHIP_STARS_MAX", "2")]);
        assert_eq!((c.stars_min, c.stars_max), (2, 9));
    }
}
