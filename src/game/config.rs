use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::food::FoodPolicy;

/// Width and height of the square playing field, in cells
pub const GRID_SIZE: i32 = 20;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// How long the game-over screen stays up before returning to the menu
    pub game_over_delay_ms: u64,
    /// Game-over fade-in rate, in alpha units (0-255) per second
    pub fade_speed: f32,
    /// Where food is allowed to appear
    pub food_policy: FoodPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_snake_length: 3,
            tick_interval_ms: 100,
            game_over_delay_ms: 1000,
            fade_speed: 150.0,
            food_policy: FoodPolicy::Uniform,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.game_over_delay(), Duration::from_secs(1));
        assert_eq!(config.food_policy, FoodPolicy::Uniform);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GameConfig::from_json(r#"{ "tick_interval_ms": 50, "food_policy": "exclude_occupied" }"#)
                .unwrap();
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.food_policy, FoodPolicy::ExcludeOccupied);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.fade_speed, 150.0);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(GameConfig::from_json(r#"{ "tick_interval_ms": "fast" }"#).is_err());
    }
}
