//! Resolve command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::required;
use crate::error::SwapError;

/// Configuration for the resolve command
///
/// This struct contains all options for finding swap groups in a request
/// file and reporting them.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Request file to read
    pub input: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of swap groups to report (None = all)
    pub max_groups: Option<usize>,
    /// Where to write the report (None = stdout)
    pub output: Option<PathBuf>,
    /// Whether to exit with error code if requests remain unmatched
    pub fail_on_unmatched: bool,
}

impl ResolveConfig {
    pub fn builder() -> ResolveConfigBuilder {
        ResolveConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ResolveConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_groups: Option<Option<usize>>,
    output: Option<Option<PathBuf>>,
    fail_on_unmatched: Option<bool>,
}

impl ResolveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_groups(mut self, max_groups: Option<usize>) -> Self {
        self.max_groups = Some(max_groups);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_fail_on_unmatched(mut self, fail_on_unmatched: bool) -> Self {
        self.fail_on_unmatched = Some(fail_on_unmatched);
        self
    }
}

impl crate::common::ConfigBuilder for ResolveConfigBuilder {
    type Config = ResolveConfig;

    fn build(self) -> Result<Self::Config, SwapError> {
        Ok(ResolveConfig {
            input: required(self.input, "input")?,
            format: required(self.format, "format")?,
            max_groups: required(self.max_groups, "max_groups")?,
            output: required(self.output, "output")?,
            fail_on_unmatched: required(self.fail_on_unmatched, "fail_on_unmatched")?,
        })
    }
}
