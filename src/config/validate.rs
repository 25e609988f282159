//! Validate command configuration

use std::path::PathBuf;

use crate::common::required;
use crate::error::SwapError;

#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub input: PathBuf,
}

impl ValidateConfig {
    pub fn builder() -> ValidateConfigBuilder {
        ValidateConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ValidateConfigBuilder {
    input: Option<PathBuf>,
}

impl ValidateConfigBuilder {
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }
}

impl crate::common::ConfigBuilder for ValidateConfigBuilder {
    type Config = ValidateConfig;

    fn build(self) -> Result<Self::Config, SwapError> {
        Ok(ValidateConfig {
            input: required(self.input, "input")?,
        })
    }
}
