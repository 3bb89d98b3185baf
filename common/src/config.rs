use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Cards each player holds at the start of a round.
pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_MIN_PLAYERS: usize = 3;

/// House rules for a table. Every key of the JSON file is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub hand_size: usize,
    pub min_players: usize,
    pub max_players: Option<usize>,
    /// The game ends as soon as someone reaches this score.
    pub points_to_win: Option<u32>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            hand_size: DEFAULT_HAND_SIZE,
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: None,
            points_to_win: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Error reading config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Error deserializing config")?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> anyhow::Result<()> {
        if self.hand_size == 0 {
            anyhow::bail!("hand_size has to be at least 1");
        }

        if self.min_players < 2 {
            anyhow::bail!("min_players needs to be at least 2");
        }

        if let Some(max) = self.max_players {
            if max < self.min_players {
                anyhow::bail!("max_players ({}) is below min_players ({})", max, self.min_players);
            }
        }

        if self.points_to_win == Some(0) {
            anyhow::bail!("points_to_win has to be at least 1");
        }

        Ok(())
    }
}
