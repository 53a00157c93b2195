//! Brain configuration structures and loaders.
use std::env;
use std::time::Duration;

use crate::throttle::MoveMode;

/// Configuration for one bot brain.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub timing: TimingConfig,
    pub sensing: SensingConfig,
    pub thresholds: Thresholds,
    pub movement: MoveMode,
    /// Chat line sent on every spawn.
    pub greeting: String,
}

impl BotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CTF_TICK_MS` - Minimum time between loop iterations (default: 50)
    /// - `CTF_ERROR_BACKOFF_MS` - Pause after an unexpected error (default: 1000)
    /// - `CTF_APPROACH_TIMEOUT_MS` - Timeout for awaited movement (default: 10000)
    /// - `CTF_SIGHT_RANGE` - Search radius for entities and items (default: 33)
    /// - `CTF_MAX_OPPONENTS` - Opponents tracked per iteration (default: 3)
    /// - `CTF_TEAMMATE_BOTS_ONLY` - Ignore human teammates (default: true)
    /// - `CTF_AWAIT_MOVEMENT` - Await movement instead of fire-and-forget (default: false)
    /// - `CTF_GREETING` - Chat line sent on spawn
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CTF_TICK_MS") {
            config.timing.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("CTF_ERROR_BACKOFF_MS") {
            config.timing.error_backoff = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("CTF_APPROACH_TIMEOUT_MS") {
            config.timing.approach_timeout = Duration::from_millis(ms);
        }

        if let Some(range) = read_env::<f64>("CTF_SIGHT_RANGE") {
            config.sensing.sight_range = range;
        }
        if let Some(count) = read_env::<usize>("CTF_MAX_OPPONENTS") {
            config.sensing.max_opponents = count.max(1);
        }
        if let Some(bots_only) = read_env::<bool>("CTF_TEAMMATE_BOTS_ONLY") {
            config.sensing.teammate_bots_only = bots_only;
        }

        if let Some(await_movement) = read_env::<bool>("CTF_AWAIT_MOVEMENT") {
            config.movement = if await_movement {
                MoveMode::Await
            } else {
                MoveMode::Background
            };
        }

        if let Ok(greeting) = env::var("CTF_GREETING") {
            config.greeting = greeting;
        }

        config
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            sensing: SensingConfig::default(),
            thresholds: Thresholds::default(),
            movement: MoveMode::default(),
            greeting: DEFAULT_GREETING.to_owned(),
        }
    }
}

pub const DEFAULT_GREETING: &str = "I have come to win Capture The Flag with my main loop.";

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// One server tick. The world never changes faster than this.
    pub tick: Duration,
    pub error_backoff: Duration,
    pub approach_timeout: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            error_backoff: Duration::from_millis(1000),
            approach_timeout: Duration::from_millis(10_000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SensingConfig {
    /// Bots see roughly 30 blocks; searching further is wasted work.
    pub sight_range: f64,
    pub max_opponents: usize,
    pub teammate_bots_only: bool,
    pub loot_max_count: usize,
}

impl Default for SensingConfig {
    fn default() -> Self {
        Self {
            sight_range: 33.0,
            max_opponents: 3,
            teammate_bots_only: true,
            loot_max_count: 5,
        }
    }
}

/// Numeric limits used by the strategies. Ranges are squared distances.
#[derive(Clone, Debug)]
pub struct Thresholds {
    pub critical_health: f32,
    pub warning_health: f32,
    /// Opponent must be this close for a self-sacrifice potion.
    pub ninja_range_sq: f64,
    pub engage_range_sq: f64,
    /// Carrying the flag halves the engagement radius.
    pub engage_range_with_flag_sq: f64,
    /// Opponents this close stop block placement.
    pub danger_range_sq: f64,
    /// Entities further apart vertically are on another level (e.g. the tunnel).
    pub vertical_band: f64,
    pub placement_range_sq: f64,
    pub placement_reach_sq: f64,
    pub owned_item_weight: f64,
    pub new_item_weight: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical_health: 7.0,
            warning_health: 15.0,
            ninja_range_sq: 16.0,
            engage_range_sq: 100.0,
            engage_range_with_flag_sq: 25.0,
            danger_range_sq: 225.0,
            vertical_band: 5.0,
            placement_range_sq: 400.0,
            placement_reach_sq: 15.0,
            owned_item_weight: 999_999.0,
            new_item_weight: 1.0,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arena_tuning() {
        let config = BotConfig::default();
        assert_eq!(config.timing.tick, Duration::from_millis(50));
        assert_eq!(config.timing.error_backoff, Duration::from_secs(1));
        assert_eq!(config.sensing.max_opponents, 3);
        assert_eq!(config.thresholds.critical_health, 7.0);
        assert_eq!(config.thresholds.warning_health, 15.0);
        assert_eq!(config.movement, MoveMode::Background);
    }

    #[test]
    fn from_env_reads_overrides_and_clamps() {
        let vars = [
            ("CTF_TICK_MS", "0"),
            ("CTF_ERROR_BACKOFF_MS", "250"),
            ("CTF_APPROACH_TIMEOUT_MS", "3000"),
            ("CTF_SIGHT_RANGE", "not a number"),
            ("CTF_MAX_OPPONENTS", "0"),
            ("CTF_TEAMMATE_BOTS_ONLY", "false"),
            ("CTF_AWAIT_MOVEMENT", "true"),
            ("CTF_GREETING", "gl hf"),
        ];
        // No other test in this crate touches these variables.
        for (key, value) in vars {
            unsafe { env::set_var(key, value) };
        }
        let config = BotConfig::from_env();
        for (key, _) in vars {
            unsafe { env::remove_var(key) };
        }

        assert_eq!(config.timing.tick, Duration::from_millis(1));
        assert_eq!(config.timing.error_backoff, Duration::from_millis(250));
        assert_eq!(config.timing.approach_timeout, Duration::from_secs(3));
        assert_eq!(config.sensing.sight_range, 33.0);
        assert_eq!(config.sensing.max_opponents, 1);
        assert!(!config.sensing.teammate_bots_only);
        assert_eq!(config.movement, MoveMode::Await);
        assert_eq!(config.greeting, "gl hf");
    }
}
