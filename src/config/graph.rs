//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::required;
use crate::error::SwapError;

/// Options for rendering the request graph
#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub input: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_groups: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    input: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_groups: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_groups(mut self, highlight_groups: bool) -> Self {
        self.highlight_groups = Some(highlight_groups);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, SwapError> {
        Ok(GraphOptions {
            input: required(self.input, "input")?,
            format: required(self.format, "format")?,
            // Output and highlighting have CLI defaults
            output: self.output.flatten(),
            highlight_groups: self.highlight_groups.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_graph_options_defaults() {
        let options = GraphOptions::builder()
            .with_input(PathBuf::from("request.csv"))
            .with_format(GraphFormat::Dot)
            .build()
            .unwrap();

        assert_eq!(options.output, None);
        assert!(options.highlight_groups);
    }

    #[test]
    fn test_graph_options_require_format() {
        let result = GraphOptions::builder()
            .with_input(PathBuf::from("request.csv"))
            .build();
        assert!(result.is_err());
    }
}
