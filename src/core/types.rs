//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::SwapError;
use crate::validation;

/// Identifier of a building; a vertex in the swap graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BuildingId(u64);

impl BuildingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BuildingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Identifier of the employee filing a move request
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single employee asking to move from one building to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub employee: EmployeeId,
    pub from: BuildingId,
    pub to: BuildingId,
}

impl MoveRequest {
    pub fn new(employee: impl Into<EmployeeId>, from: u64, to: u64) -> Self {
        Self {
            employee: employee.into(),
            from: BuildingId::new(from),
            to: BuildingId::new(to),
        }
    }
}

/// A validated, ordered collection of move requests
///
/// Construction enforces the resolver's preconditions: employee ids are
/// unique and no request moves an employee to the building they are in.
#[derive(Debug, Clone, Default)]
pub struct RequestSet {
    requests: Vec<MoveRequest>,
}

impl RequestSet {
    /// Build a request set from three parallel columns
    pub fn from_columns(
        employees: Vec<EmployeeId>,
        sources: Vec<BuildingId>,
        destinations: Vec<BuildingId>,
    ) -> Result<Self, SwapError> {
        validation::validate_columns(&employees, &sources, &destinations)?;

        let requests = employees
            .into_iter()
            .zip(sources)
            .zip(destinations)
            .map(|((employee, from), to)| MoveRequest { employee, from, to })
            .collect();

        Ok(Self { requests })
    }

    pub fn from_requests(requests: Vec<MoveRequest>) -> Result<Self, SwapError> {
        let mut employees = Vec::with_capacity(requests.len());
        let mut sources = Vec::with_capacity(requests.len());
        let mut destinations = Vec::with_capacity(requests.len());
        for request in requests {
            employees.push(request.employee);
            sources.push(request.from);
            destinations.push(request.to);
        }
        Self::from_columns(employees, sources, destinations)
    }

    pub fn requests(&self) -> &[MoveRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Distinct buildings in first-appearance order: every source in request
    /// order, then destinations that never appear as a source
    pub fn buildings(&self) -> Vec<BuildingId> {
        let mut seen = HashSet::new();
        let sources = self.requests.iter().map(|r| r.from);
        let destinations = self.requests.iter().map(|r| r.to);
        sources
            .chain(destinations)
            .filter(|building| seen.insert(*building))
            .collect()
    }
}

/// One closed chain of moves that can be executed together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapGroup {
    moves: Vec<MoveRequest>,
}

impl SwapGroup {
    pub fn new(moves: Vec<MoveRequest>) -> Self {
        Self { moves }
    }

    /// Moves in traversal order around the cycle
    pub fn moves(&self) -> &[MoveRequest] {
        &self.moves
    }

    pub fn employees(&self) -> Vec<EmployeeId> {
        self.moves.iter().map(|m| m.employee.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether every move lands where the next one leaves, wrapping around
    pub fn is_closed(&self) -> bool {
        !self.moves.is_empty()
            && self
                .moves
                .iter()
                .zip(self.moves.iter().cycle().skip(1))
                .all(|(current, next)| current.to == next.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buildings_first_appearance_order() {
        let set = RequestSet::from_requests(vec![
            MoveRequest::new("E1", 5, 2),
            MoveRequest::new("E2", 2, 9),
            MoveRequest::new("E3", 5, 7),
        ])
        .unwrap();

        let buildings: Vec<u64> = set.buildings().into_iter().map(BuildingId::get).collect();
        assert_eq!(buildings, vec![5, 2, 9, 7]);
    }

    #[test]
    fn test_building_id_parse_trims() {
        assert_eq!(" 42 ".parse::<BuildingId>().unwrap(), BuildingId::new(42));
        assert!("4x".parse::<BuildingId>().is_err());
        assert!("-1".parse::<BuildingId>().is_err());
    }

    #[test]
    fn test_swap_group_closure() {
        let closed = SwapGroup::new(vec![
            MoveRequest::new("E1", 1, 2),
            MoveRequest::new("E2", 2, 3),
            MoveRequest::new("E3", 3, 1),
        ]);
        assert!(closed.is_closed());

        let open = SwapGroup::new(vec![
            MoveRequest::new("E1", 1, 2),
            MoveRequest::new("E2", 3, 1),
        ]);
        assert!(!open.is_closed());
        assert!(!SwapGroup::new(vec![]).is_closed());
    }

    #[test]
    fn test_employee_id_serializes_as_string() {
        let json = serde_json::to_string(&MoveRequest::new("E9", 1, 4)).unwrap();
        assert_eq!(json, r#"{"employee":"E9","from":1,"to":4}"#);
    }
}
