use crate::domain::MoneyFormat;
use crate::error::ConfigError;

pub const CHANNEL_CAPACITY_VAR: &str = "STOREFRONT_CHANNEL_CAPACITY";
pub const CURRENCY_SYMBOL_VAR: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const DECIMAL_SEPARATOR_VAR: &str = "STOREFRONT_DECIMAL_SEPARATOR";

/// Runtime settings for the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Capacity of the service's request channel.
    pub channel_capacity: usize,
    pub money: MoneyFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            money: MoneyFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(CURRENCY_SYMBOL_VAR) {
            config.money.symbol = value;
        }

        if let Some(value) = lookup(DECIMAL_SEPARATOR_VAR) {
            let mut chars = value.chars();
            config.money.decimal_separator = match (chars.next(), chars.next()) {
                (Some(separator), None) => separator,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: DECIMAL_SEPARATOR_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
