use crate::error::{MinimizeError, Result};
use crate::reserved;
use crate::types::Aggressiveness;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimizerConfig {
    pub aggressiveness: Aggressiveness,
    /// Longest short name the allocator may hand out.
    pub max_name_len: usize,
    /// Section codes whose lines use positional references. `W` also
    /// covers `>WS` and `>WM`.
    pub special_sections: Vec<String>,
    /// Names to keep out of the allocator on top of the runtime built-ins.
    pub extra_reserved: Vec<String>,
    /// Fail instead of collapsing a name that is discovered twice.
    pub reject_duplicates: bool,
    pub limits: ReportLimits,
}

/// Thresholds above which the report prints a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLimits {
    pub max_output_bytes: usize,
    pub max_variables: usize,
    pub max_permanent: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            aggressiveness: Aggressiveness::default(),
            max_name_len: 3,
            special_sections: vec!["W".into()],
            extra_reserved: Vec::new(),
            reject_duplicates: false,
            limits: ReportLimits::default(),
        }
    }
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_output_bytes: 2560,
            max_variables: 50,
            max_permanent: 12,
        }
    }
}

impl MinimizerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn with_aggressiveness(mut self, aggressiveness: Aggressiveness) -> Self {
        self.aggressiveness = aggressiveness;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(MinimizeError::InvalidConfig("max_name_len must be at least 1".into()));
        }
        if self.extra_reserved.iter().any(String::is_empty) {
            return Err(MinimizeError::InvalidConfig("extra_reserved contains an empty word".into()));
        }
        Ok(())
    }

    /// True if `name` must never be allocated.
    pub fn is_reserved(&self, name: &str) -> bool {
        reserved::is_reserved(name) || self.extra_reserved.iter().any(|w| w == name)
    }
}
