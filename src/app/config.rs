use crate::game::world::WorldConfig;
use crate::shared::names::sanitize_player_name;
use std::env;
use std::time::Duration;

const DEFAULT_PLAYER_NAME: &str = "you";
const DEFAULT_TICK_MS: u64 = 16;
const MAX_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub tick_ms: u64,
    pub frame_every: u64,
    pub run_for: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = WorldConfig::default();
        let parsed = |key: &str| lookup(key).map(|value| value.trim().to_string());

        let world = WorldConfig {
            seed: parsed("ARENA_SEED").and_then(|value| value.parse::<u64>().ok()),
            bot_count: parsed("ARENA_BOT_COUNT")
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(defaults.bot_count),
            food_count: parsed("ARENA_FOOD_COUNT")
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(defaults.food_count),
            player_name: sanitize_player_name(
                &lookup("ARENA_PLAYER_NAME").unwrap_or_default(),
                DEFAULT_PLAYER_NAME,
            ),
        };

        Self {
            world,
            tick_ms: parsed("ARENA_TICK_MS")
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_TICK_MS)
                .clamp(1, MAX_TICK_MS),
            frame_every: parsed("ARENA_FRAME_EVERY")
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(1)
                .max(1),
            run_for: parsed("ARENA_RUN_SECONDS")
                .and_then(|value| value.parse::<f64>().ok())
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .map(Duration::from_secs_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.world.seed, None);
        assert_eq!(config.world.bot_count, 30);
        assert_eq!(config.world.food_count, 24);
        assert_eq!(config.world.player_name, "you");
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.frame_every, 1);
        assert_eq!(config.run_for, None);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("ARENA_SEED", "77"),
            ("ARENA_BOT_COUNT", " 4 "),
            ("ARENA_FOOD_COUNT", "10"),
            ("ARENA_PLAYER_NAME", "  Night   Crawler  "),
            ("ARENA_TICK_MS", "33"),
            ("ARENA_FRAME_EVERY", "2"),
            ("ARENA_RUN_SECONDS", "1.5"),
        ]);
        assert_eq!(config.world.seed, Some(77));
        assert_eq!(config.world.bot_count, 4);
        assert_eq!(config.world.food_count, 10);
        assert_eq!(config.world.player_name, "Night Crawler");
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.frame_every, 2);
        assert_eq!(config.run_for, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn bad_values_fall_back_or_clamp() {
        let config = config_from(&[
            ("ARENA_SEED", "seven"),
            ("ARENA_BOT_COUNT", "-1"),
            ("ARENA_TICK_MS", "0"),
            ("ARENA_FRAME_EVERY", "0"),
            ("ARENA_RUN_SECONDS", "-3"),
        ]);
        assert_eq!(config.world.seed, None);
        assert_eq!(config.world.bot_count, 30);
        assert_eq!(config.tick_ms, 1);
        assert_eq!(config.frame_every, 1);
        assert_eq!(config.run_for, None);

        let slow = config_from(&[("ARENA_TICK_MS", "60000")]);
        assert_eq!(slow.tick_ms, 1000);
    }
}
