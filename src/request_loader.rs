//! Reading move requests from disk
//!
//! CSV is the primary format; `.toml` and `.json` files are accepted as well.
//! Row-level problems in CSV files point at the offending line.

use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::constants::input::CSV_HEADERS;
use crate::core::{BuildingId, EmployeeId, RequestSet};
use crate::error::{SwapError, TomlParseError};

/// Supported request file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Csv,
    Toml,
    Json,
}

impl RequestFormat {
    /// Pick a format from the file extension, falling back to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => RequestFormat::Toml,
            Some("json") => RequestFormat::Json,
            _ => RequestFormat::Csv,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RequestDocument {
    #[serde(default)]
    request: Vec<RawRequest>,
}

/// A request as written in a TOML or JSON file; fields are checked by hand so
/// that gaps and bad values get the same classification as CSV rows
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    employee_id: Option<RawField>,
    #[serde(default)]
    building_from: Option<RawField>,
    #[serde(default)]
    building_to: Option<RawField>,
}

/// Any scalar a structured request file may hold
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Unsupported(IgnoredAny),
}

impl RawField {
    /// The value as text, trimmed the same way CSV fields are
    fn text(&self) -> String {
        match self {
            RawField::Unsigned(n) => n.to_string(),
            RawField::Signed(n) => n.to_string(),
            RawField::Float(n) => n.to_string(),
            RawField::Boolean(b) => b.to_string(),
            RawField::Text(text) => text.trim().to_string(),
            RawField::Unsupported(_) => "<array or table>".to_string(),
        }
    }
}

/// Columns accumulated while reading a file
#[derive(Default)]
struct Columns {
    employees: Vec<EmployeeId>,
    sources: Vec<BuildingId>,
    destinations: Vec<BuildingId>,
}

impl Columns {
    fn push(&mut self, employee: &str, from: BuildingId, to: BuildingId) {
        self.employees.push(EmployeeId::new(employee));
        self.sources.push(from);
        self.destinations.push(to);
    }

    fn into_request_set(self) -> Result<RequestSet, SwapError> {
        RequestSet::from_columns(self.employees, self.sources, self.destinations)
    }
}

pub struct RequestLoader;

impl RequestLoader {
    /// Load and validate the request file at `path`
    pub fn load(path: &Path) -> Result<RequestSet> {
        let content = read_file(path)?;
        let format = RequestFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = content.len(), "loading requests");

        let requests = match format {
            RequestFormat::Csv => Self::parse_csv(&path.display().to_string(), &content),
            RequestFormat::Toml => Self::parse_toml(&path.display().to_string(), &content),
            RequestFormat::Json => Self::parse_json(path, &content),
        }?;

        debug!(requests = requests.len(), "requests loaded");
        Ok(requests)
    }

    /// Parse CSV request data with an `EmployeeID,buildingFrom,buildingTo` header
    pub fn parse_csv(name: &str, content: &str) -> Result<RequestSet, SwapError> {
        let csv_error = |source| SwapError::Csv {
            path: name.into(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let found: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();
        if found != CSV_HEADERS {
            return Err(SwapError::MissingHeader {
                found,
                expected: CSV_HEADERS.iter().map(|h| h.to_string()).collect(),
                source_code: Some(named_source(name, content)),
                span: Some(line_span(content, 0)),
            });
        }

        let mut columns = Columns::default();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record).map_err(csv_error)? {
            let span = record
                .position()
                .map(|position| line_span(content, position.byte() as usize));
            let field = |index: usize| record.get(index).unwrap_or("");
            let (employee, from, to) = (field(0), field(1), field(2));

            if employee.is_empty() || from.is_empty() || to.is_empty() {
                return Err(SwapError::MissingValue {
                    employee: employee.to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                    source_code: Some(named_source(name, content)),
                    span,
                });
            }

            let parse_building = |value: &str| {
                value
                    .parse::<BuildingId>()
                    .map_err(|_| SwapError::InvalidData {
                        employee: employee.to_string(),
                        value: value.to_string(),
                        source_code: Some(named_source(name, content)),
                        span,
                    })
            };
            let from = parse_building(from)?;
            let to = parse_building(to)?;

            if from == to {
                return Err(SwapError::SourceMatchesDestination {
                    employee: employee.to_string(),
                    building: from,
                    source_code: Some(named_source(name, content)),
                    span,
                });
            }

            columns.push(employee, from, to);
        }

        columns.into_request_set()
    }

    /// Parse a TOML document made of `[[request]]` tables
    pub fn parse_toml(name: &str, content: &str) -> Result<RequestSet, SwapError> {
        let document: RequestDocument = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
            SwapError::TomlParseError(Box::new(TomlParseError {
                file: name.to_string(),
                source_code: named_source(name, content),
                span,
                source: e,
            }))
        })?;

        raw_to_request_set(document.request)
    }

    /// Parse a JSON array of request objects
    pub fn parse_json(path: &Path, content: &str) -> Result<RequestSet, SwapError> {
        let raw: Vec<RawRequest> =
            serde_json::from_str(content).map_err(|source| SwapError::JsonParseError {
                path: path.to_path_buf(),
                source,
            })?;

        raw_to_request_set(raw)
    }
}

fn raw_to_request_set(raw: Vec<RawRequest>) -> Result<RequestSet, SwapError> {
    let mut columns = Columns::default();
    for request in raw {
        let fields = (
            request.employee_id.as_ref(),
            request.building_from.as_ref(),
            request.building_to.as_ref(),
        );
        let text = |field: Option<&RawField>| field.map(RawField::text).unwrap_or_default();
        let (employee, from, to) = (text(fields.0), text(fields.1), text(fields.2));

        let (Some(raw_employee), Some(raw_from), Some(raw_to)) = fields else {
            return Err(missing_value(employee, from, to));
        };
        if employee.is_empty() || from.is_empty() || to.is_empty() {
            return Err(missing_value(employee, from, to));
        }
        if let RawField::Unsupported(_) = raw_employee {
            return Err(SwapError::InvalidData {
                value: employee.clone(),
                employee,
                source_code: None,
                span: None,
            });
        }

        let from = raw_building(&employee, raw_from, &from)?;
        let to = raw_building(&employee, raw_to, &to)?;
        columns.push(&employee, from, to);
    }
    columns.into_request_set()
}

fn missing_value(employee: String, from: String, to: String) -> SwapError {
    SwapError::MissingValue {
        employee,
        from,
        to,
        source_code: None,
        span: None,
    }
}

/// Accept integers and numeric strings, the same values a CSV cell may hold
fn raw_building(employee: &str, field: &RawField, text: &str) -> Result<BuildingId, SwapError> {
    let building = match field {
        RawField::Unsigned(n) => Some(BuildingId::new(*n)),
        RawField::Text(_) => text.parse::<BuildingId>().ok(),
        _ => None,
    };
    building.ok_or_else(|| SwapError::InvalidData {
        employee: employee.to_string(),
        value: text.to_string(),
        source_code: None,
        span: None,
    })
}

fn read_file(path: &Path) -> Result<String, SwapError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SwapError::MissingInputFile {
            path: path.to_path_buf(),
        },
        _ => SwapError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

fn named_source(name: &str, content: &str) -> NamedSource<String> {
    NamedSource::new(name, content.to_string())
}

/// Span covering the line that starts at byte `start`
fn line_span(content: &str, start: usize) -> SourceSpan {
    let rest = content.get(start..).unwrap_or("");
    let len = rest.find(['\r', '\n']).unwrap_or(rest.len());
    SourceSpan::new(start.into(), len)
}
