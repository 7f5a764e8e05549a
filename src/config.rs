use std::env::{self, VarError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable holding the seed used by [`RollConfig::from_env`].
pub const SEED_VAR: &str = "CRITICAL_DICE_SEED";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{SEED_VAR} must be an unsigned integer, but found '{0}'")]
    InvalidSeed(String),
}

/// How rolls get their randomness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollConfig {
    /// When set every dice is rolled by a generator freshly seeded with it,
    /// making results reproducible.
    pub seed: Option<u64>,
}

impl RollConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Reads the seed from `CRITICAL_DICE_SEED`, an unset or empty variable
    /// means no seed.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(SEED_VAR) {
            Ok(value) => Self::from_seed_str(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(value)) => {
                Err(ConfigError::InvalidSeed(value.to_string_lossy().into_owned()))
            }
        }
    }

    fn from_seed_str(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }

        value
            .parse()
            .map(Self::with_seed)
            .map_err(|_| ConfigError::InvalidSeed(value.to_string()))
    }
}
