//! Precondition checks for request columns
//!
//! The resolver assumes unique employees, equal-length columns and no
//! request whose source equals its destination. Violations are reported
//! here, before any graph is built.

use std::collections::HashMap;

use crate::core::{BuildingId, EmployeeId};
use crate::error::SwapError;

pub fn validate_columns(
    employees: &[EmployeeId],
    sources: &[BuildingId],
    destinations: &[BuildingId],
) -> Result<(), SwapError> {
    let duplicates = duplicate_employees(employees);
    if !duplicates.is_empty() {
        return Err(SwapError::DuplicateEmployeeId {
            ids: duplicates.into_iter().map(|id| id.to_string()).collect(),
        });
    }

    if employees.len() != sources.len() || employees.len() != destinations.len() {
        return Err(SwapError::LengthMismatch {
            employees: employees.len(),
            sources: sources.len(),
            destinations: destinations.len(),
        });
    }

    let self_move = employees
        .iter()
        .zip(sources.iter().zip(destinations))
        .find(|(_, (from, to))| from == to);
    if let Some((employee, (building, _))) = self_move {
        return Err(SwapError::SourceMatchesDestination {
            employee: employee.to_string(),
            building: *building,
            source_code: None,
            span: None,
        });
    }

    Ok(())
}

/// Employee ids appearing more than once, in order of first appearance
pub fn duplicate_employees(employees: &[EmployeeId]) -> Vec<&EmployeeId> {
    let mut counts: HashMap<&EmployeeId, usize> = HashMap::new();
    for employee in employees {
        *counts.entry(employee).or_default() += 1;
    }

    let mut duplicates = Vec::new();
    for employee in employees {
        if counts.get(employee).is_some_and(|&count| count > 1) && !duplicates.contains(&employee)
        {
            duplicates.push(employee);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ids(raw: &[&str]) -> Vec<EmployeeId> {
        raw.iter().map(|id| EmployeeId::new(*id)).collect()
    }

    fn buildings(raw: &[u64]) -> Vec<BuildingId> {
        raw.iter().map(|id| BuildingId::new(*id)).collect()
    }

    #[test]
    fn test_valid_columns() {
        let result = validate_columns(
            &ids(&["E1", "E2"]),
            &buildings(&[1, 2]),
            &buildings(&[2, 1]),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_columns_are_valid() {
        assert!(validate_columns(&[], &[], &[]).is_ok());
    }

    #[test]
    fn test_duplicates_reported_once_in_order() {
        let employees = ids(&["E3", "E1", "E3", "E2", "E1", "E3"]);
        let duplicates: Vec<&str> = duplicate_employees(&employees)
            .into_iter()
            .map(EmployeeId::as_str)
            .collect();
        assert_eq!(duplicates, vec!["E3", "E1"]);
    }

    #[test]
    fn test_duplicates_checked_before_lengths() {
        let err = validate_columns(&ids(&["E1", "E1"]), &buildings(&[1]), &buildings(&[2]))
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::DuplicateEmployeeId));
    }

    #[test]
    fn test_length_mismatch() {
        let err = validate_columns(&ids(&["E1", "E2"]), &buildings(&[1, 2]), &buildings(&[2]))
            .unwrap_err();
        match err {
            SwapError::LengthMismatch {
                employees,
                sources,
                destinations,
            } => assert_eq!((employees, sources, destinations), (2, 2, 1)),
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_self_move_rejected() {
        let err = validate_columns(
            &ids(&["E1", "E2"]),
            &buildings(&[1, 4]),
            &buildings(&[2, 4]),
        )
        .unwrap_err();
        match err {
            SwapError::SourceMatchesDestination {
                employee, building, ..
            } => {
                assert_eq!(employee, "E2");
                assert_eq!(building, BuildingId::new(4));
            }
            other => panic!("Expected SourceMatchesDestination, got {other:?}"),
        }
    }
}
