use config::{
    builder::{ConfigBuilder, DefaultState},
    Config, ConfigError, Environment, File, FileFormat,
};
use serde::Deserialize;

use crate::domain::rental::Tariff;

pub mod domain;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    pub tariff: Tariff,
}

impl RentalConfig {
    /// Loads `rental.toml` (when present) overlaid with `RENTAL_*` environment variables,
    /// e.g. `RENTAL_TARIFF__NIGHT_START_HOUR=23`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name("rental").required(false))
                .add_source(
                    Environment::with_prefix("RENTAL")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder.build()?.try_deserialize::<RentalConfig>()?;
        config
            .tariff
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(config)
    }
}
