//! Configuration types for value-table creation.

use std::{fs, path::Path};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_LEARNING_RATE: f64 = 0.1;
const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

/// Learning hyperparameters, fixed for the lifetime of a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
}

impl Hyperparameters {
    /// Create validated hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either value is NaN or infinite.
    pub fn new(learning_rate: f64, discount_factor: f64) -> Result<Self> {
        let params = Self {
            learning_rate,
            discount_factor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that both values are finite.
    ///
    /// Values outside [0, 1] are accepted but logged.
    pub fn validate(&self) -> Result<()> {
        check_finite("learning_rate", self.learning_rate)?;
        check_finite("discount_factor", self.discount_factor)?;

        if !(0.0..=1.0).contains(&self.learning_rate) {
            warn!(
                "learning_rate {} is outside [0, 1]; updates may diverge",
                self.learning_rate
            );
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            warn!(
                "discount_factor {} is outside [0, 1]; values may diverge",
                self.discount_factor
            );
        }
        Ok(())
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
        }
    }
}

/// Everything needed to build a [`ValueTable`](crate::ValueTable) besides
/// its state and action spaces.
///
/// # Examples
///
/// ```
/// use qlearning::TableConfig;
///
/// let config = TableConfig::default()
///     .with_initial_reward(1.0)
///     .with_learning_rate(0.5)
///     .with_discount_factor(0.99);
/// config.validate().unwrap();
///
/// let parsed = TableConfig::from_json_str(r#"{ "learning_rate": 0.5 }"#).unwrap();
/// assert_eq!(parsed.discount_factor, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Value every cell starts with
    pub initial_reward: f64,
    pub learning_rate: f64,
    pub discount_factor: f64,
}

impl TableConfig {
    pub fn new(initial_reward: f64, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            initial_reward,
            learning_rate,
            discount_factor,
        }
    }

    pub fn with_initial_reward(mut self, initial_reward: f64) -> Self {
        self.initial_reward = initial_reward;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            learning_rate: self.learning_rate,
            discount_factor: self.discount_factor,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("initial_reward", self.initial_reward)?;
        self.hyperparameters().validate()
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_reward: 0.0,
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
        }
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_configuration(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
