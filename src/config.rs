use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const MIN_SPEED: u64 = 1;
pub const MAX_SPEED: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Animation speed, 1 (slow) to 10 (fast)
    pub speed: u64,
    /// Whether the explanation/code panel is visible
    #[serde(default = "default_show_code")]
    pub show_code: bool,
}

fn default_show_code() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 5,
            show_code: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".dsa-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        let mut config: Config = serde_json::from_str(&contents).ok()?;
        config.speed = config.speed.clamp(MIN_SPEED, MAX_SPEED);
        Some(config)
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

/// Per-step delay for a given speed: 1000 ms at speed 1 down to 100 ms at
/// speed 10, matching a 1000/speed curve.
pub fn step_delay(speed: u64) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(1000 / speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_delay_curve() {
        assert_eq!(step_delay(1), Duration::from_millis(1000));
        assert_eq!(step_delay(2), Duration::from_millis(500));
        assert_eq!(step_delay(10), Duration::from_millis(100));
    }

    #[test]
    fn test_step_delay_clamps_out_of_range_speeds() {
        assert_eq!(step_delay(0), Duration::from_millis(1000));
        assert_eq!(step_delay(99), Duration::from_millis(100));
    }
}
