use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::BuildingId;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML request file '{file}'")]
#[diagnostic(
    code(building_swap::toml_parse_error),
    help("Each request must be a [[request]] table with employee_id, building_from and building_to")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum SwapError {
    #[error("Input data is invalid for employee '{employee}': '{value}' is not a building id")]
    #[diagnostic(
        code(building_swap::invalid_data),
        help("Building ids must be non-negative whole numbers")
    )]
    InvalidData {
        employee: String,
        value: String,
        #[source_code]
        source_code: Option<NamedSource<String>>,
        #[label("not a building id")]
        span: Option<SourceSpan>,
    },

    #[error("Duplicate employee ID given: {}", .ids.join(", "))]
    #[diagnostic(
        code(building_swap::duplicate_employee_id),
        help("Each employee may file at most one move request")
    )]
    DuplicateEmployeeId { ids: Vec<String> },

    #[error(
        "Request is missing a value (employee: '{employee}', from: '{from}', to: '{to}')"
    )]
    #[diagnostic(
        code(building_swap::missing_value),
        help("Every request needs an employee id, a source building and a destination building")
    )]
    MissingValue {
        employee: String,
        from: String,
        to: String,
        #[source_code]
        source_code: Option<NamedSource<String>>,
        #[label("incomplete request")]
        span: Option<SourceSpan>,
    },

    #[error("Input file '{}' is missing", .path.display())]
    #[diagnostic(
        code(building_swap::missing_input_file),
        help("Pass the request file as an argument or set BUILDING_SWAP_INPUT")
    )]
    MissingInputFile { path: PathBuf },

    #[error(
        "Source and destination building are the same for employee '{employee}' (building {building})"
    )]
    #[diagnostic(
        code(building_swap::source_matches_destination),
        help("Drop requests that do not move the employee anywhere")
    )]
    SourceMatchesDestination {
        employee: String,
        building: BuildingId,
        #[source_code]
        source_code: Option<NamedSource<String>>,
        #[label("moves nowhere")]
        span: Option<SourceSpan>,
    },

    #[error(
        "Request file has wrong or missing headers: found [{}], expected [{}]",
        .found.join(", "),
        .expected.join(", ")
    )]
    #[diagnostic(
        code(building_swap::missing_header),
        help("The first line must be exactly: EmployeeID,buildingFrom,buildingTo")
    )]
    MissingHeader {
        found: Vec<String>,
        expected: Vec<String>,
        #[source_code]
        source_code: Option<NamedSource<String>>,
        #[label("header row")]
        span: Option<SourceSpan>,
    },

    #[error(
        "Request columns have different lengths: {employees} employees, {sources} sources, \
         {destinations} destinations"
    )]
    #[diagnostic(
        code(building_swap::length_mismatch),
        help("Every employee needs exactly one source and one destination building")
    )]
    LengthMismatch {
        employees: usize,
        sources: usize,
        destinations: usize,
    },

    #[error("Failed to read file '{}'", .path.display())]
    #[diagnostic(
        code(building_swap::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{}'", .path.display())]
    #[diagnostic(
        code(building_swap::csv_error),
        help("Check the quoting and line endings of the request file")
    )]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid JSON request list in '{}'", .path.display())]
    #[diagnostic(
        code(building_swap::json_parse_error),
        help("Expected an array of objects with employee_id, building_from and building_to")
    )]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(building_swap::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(building_swap::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(building_swap::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(building_swap::config_error),
        help("Check your command arguments and environment variables")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(building_swap::graph_error),
        help("This is an internal error in swap resolution - please report it")
    )]
    GraphError { message: String },
}

/// Categories of malformed input rejected before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidData,
    DuplicateEmployeeId,
    MissingValue,
    MissingInputFile,
    SourceMatchesDestination,
    MissingHeader,
    LengthMismatch,
}

impl ErrorKind {
    /// Stable short code shown to operators
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidData => "IE-1",
            ErrorKind::DuplicateEmployeeId => "IE-2",
            ErrorKind::MissingValue => "IE-3",
            ErrorKind::MissingInputFile => "IE-4",
            ErrorKind::SourceMatchesDestination => "IE-5",
            ErrorKind::MissingHeader => "IE-6",
            ErrorKind::LengthMismatch => "IE-7",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidData => "invalid data",
            ErrorKind::DuplicateEmployeeId => "duplicate employee id",
            ErrorKind::MissingValue => "missing value",
            ErrorKind::MissingInputFile => "missing input file",
            ErrorKind::SourceMatchesDestination => "source matches destination",
            ErrorKind::MissingHeader => "missing header",
            ErrorKind::LengthMismatch => "length mismatch",
        };
        write!(f, "{} ({name})", self.code())
    }
}

impl SwapError {
    /// Input-validation category of this error, if it is one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SwapError::InvalidData { .. } => Some(ErrorKind::InvalidData),
            SwapError::DuplicateEmployeeId { .. } => Some(ErrorKind::DuplicateEmployeeId),
            SwapError::MissingValue { .. } => Some(ErrorKind::MissingValue),
            SwapError::MissingInputFile { .. } => Some(ErrorKind::MissingInputFile),
            SwapError::SourceMatchesDestination { .. } => {
                Some(ErrorKind::SourceMatchesDestination)
            }
            SwapError::MissingHeader { .. } => Some(ErrorKind::MissingHeader),
            SwapError::LengthMismatch { .. } => Some(ErrorKind::LengthMismatch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_duplicate_employee_display() {
        let error = SwapError::DuplicateEmployeeId {
            ids: vec!["E1".to_string(), "E7".to_string()],
        };

        assert_eq!(error.to_string(), "Duplicate employee ID given: E1, E7");
        assert_eq!(error.kind(), Some(ErrorKind::DuplicateEmployeeId));
    }

    #[test]
    fn test_source_matches_destination_display() {
        let error = SwapError::SourceMatchesDestination {
            employee: "E3".to_string(),
            building: BuildingId::new(12),
            source_code: None,
            span: None,
        };

        assert_eq!(
            error.to_string(),
            "Source and destination building are the same for employee 'E3' (building 12)"
        );
    }

    #[test]
    fn test_missing_header_display() {
        let error = SwapError::MissingHeader {
            found: vec!["id".to_string(), "from".to_string()],
            expected: vec![
                "EmployeeID".to_string(),
                "buildingFrom".to_string(),
                "buildingTo".to_string(),
            ],
            source_code: None,
            span: None,
        };

        assert_eq!(
            error.to_string(),
            "Request file has wrong or missing headers: found [id, from], expected [EmployeeID, \
             buildingFrom, buildingTo]"
        );
    }

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::InvalidData.code(), "IE-1");
        assert_eq!(ErrorKind::MissingInputFile.code(), "IE-4");
        assert_eq!(ErrorKind::MissingHeader.code(), "IE-6");
        assert_eq!(
            ErrorKind::SourceMatchesDestination.to_string(),
            "IE-5 (source matches destination)"
        );
    }

    #[test]
    fn test_internal_errors_have_no_kind() {
        let error = SwapError::GraphError {
            message: "label missing".to_string(),
        };
        assert_eq!(error.kind(), None);
        assert_eq!(error.to_string(), "Graph error: label missing");
    }

    #[test]
    fn test_error_codes() {
        let error = SwapError::MissingInputFile {
            path: PathBuf::from("request.csv"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
        assert_eq!(error.to_string(), "Input file 'request.csv' is missing");
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let swap_err: SwapError = io_err.into();

        match swap_err {
            SwapError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
