//! Session configuration read from the environment.
use std::env;

/// Tunables for one combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for boss skill choice and power rolls. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Experience granted to the character on victory.
    pub experience_reward: u32,
    /// Oldest combat log entries are dropped beyond this many.
    pub max_log_entries: usize,
    /// Mana the character recovers at the start of every new turn.
    pub mana_regen: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            experience_reward: 100,
            max_log_entries: 200,
            mana_regen: 10,
        }
    }
}

impl SessionConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DIVINE_CLASH_SEED` - RNG seed (default: random)
    /// - `DIVINE_CLASH_XP_REWARD` - experience per victory (default: 100)
    /// - `DIVINE_CLASH_LOG_LIMIT` - combat log length (default: 200, min 1)
    /// - `DIVINE_CLASH_MANA_REGEN` - mana recovered per turn (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("DIVINE_CLASH_SEED") {
            config.seed = Some(seed);
        }
        if let Some(reward) = read_env::<u32>("DIVINE_CLASH_XP_REWARD") {
            config.experience_reward = reward;
        }
        if let Some(limit) = read_env::<usize>("DIVINE_CLASH_LOG_LIMIT") {
            config.max_log_entries = limit.max(1);
        }
        if let Some(regen) = read_env::<u32>("DIVINE_CLASH_MANA_REGEN") {
            config.mana_regen = regen;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
