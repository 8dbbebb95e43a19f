use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BakeConfig {
    pub thresholds: CookThresholds,
}

impl BakeConfig {
    pub const fn new(thresholds: CookThresholds) -> Self {
        Self { thresholds }
    }

    /// Parses a config like `{"thresholds": {"low": 2, "mid": 4, "high": 6, "max": 8}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
