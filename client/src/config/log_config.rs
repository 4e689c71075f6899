use common::config::Validate;
use serde::{Deserialize, Serialize};

const MAX_PREFIX_LEN: usize = 32;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("log prefix must not be empty if provided".to_string());
            }
            if prefix.len() > MAX_PREFIX_LEN {
                return Err(format!(
                    "log prefix must not exceed {} characters",
                    MAX_PREFIX_LEN
                ));
            }
        }
        Ok(())
    }
}
