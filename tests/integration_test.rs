//! Integration tests for swap resolution using the library interface

use std::collections::HashSet;

use building_swap::core::{EmployeeId, MoveRequest, RequestSet, SwapGroup};
use building_swap::detector::SwapDetector;
use building_swap::find_swap_groups;
use building_swap::graph::{SwapGraph, cyclic_segment};
use pretty_assertions::assert_eq;

fn requests(raw: &[(&str, u64, u64)]) -> RequestSet {
    RequestSet::from_requests(
        raw.iter()
            .map(|&(employee, from, to)| MoveRequest::new(employee, from, to))
            .collect(),
    )
    .expect("test requests are valid")
}

fn employee_groups(groups: &[SwapGroup]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| group.employees().iter().map(|e| e.to_string()).collect())
        .collect()
}

fn resolve(raw: &[(&str, u64, u64)]) -> Vec<Vec<String>> {
    employee_groups(&find_swap_groups(&requests(raw)).unwrap())
}

/// Checks every property a resolution must have regardless of input
fn assert_resolution_properties(input: &RequestSet, detector: &SwapDetector) {
    let input_employees: HashSet<&EmployeeId> =
        input.requests().iter().map(|r| &r.employee).collect();
    let mut consumed = HashSet::new();

    for group in detector.swap_groups() {
        assert!(group.len() >= 2, "swap group shorter than two: {group:?}");
        assert!(group.is_closed(), "swap group does not close: {group:?}");
        for request in group.moves() {
            assert!(input.requests().contains(request));
            assert!(input_employees.contains(&request.employee));
            assert!(
                consumed.insert(request.employee.clone()),
                "{} appears in more than one swap group",
                request.employee
            );
        }
    }

    for request in detector.unmatched() {
        assert!(!consumed.contains(&request.employee));
    }
    assert_eq!(consumed.len() + detector.unmatched().len(), input.len());
}

#[test]
fn scenario_a_two_way_swap() {
    assert_eq!(resolve(&[("E1", 1, 2), ("E2", 2, 1)]), vec![vec!["E1", "E2"]]);
}

#[test]
fn scenario_b_three_way_swap() {
    assert_eq!(
        resolve(&[("E1", 1, 2), ("E2", 2, 3), ("E3", 3, 1)]),
        vec![vec!["E1", "E2", "E3"]]
    );
}

#[test]
fn scenario_c_parallel_swaps_follow_arrival_order() {
    assert_eq!(
        resolve(&[("E1", 1, 2), ("E2", 2, 1), ("E3", 1, 2), ("E4", 2, 1)]),
        vec![vec!["E1", "E2"], vec!["E3", "E4"]]
    );
}

#[test]
fn scenario_d_no_cycle() {
    assert!(resolve(&[("E1", 1, 2), ("E2", 3, 4)]).is_empty());
}

#[test]
fn scenario_e_disjoint_edge_left_over() {
    let input = requests(&[("E1", 1, 2), ("E2", 2, 3), ("E3", 3, 1), ("E4", 4, 5)]);
    let mut detector = SwapDetector::new();
    detector.detect_in_requests(&input).unwrap();

    assert_eq!(
        employee_groups(detector.swap_groups()),
        vec![vec!["E1", "E2", "E3"]]
    );
    assert_eq!(detector.unmatched(), &[MoveRequest::new("E4", 4, 5)]);
    assert_resolution_properties(&input, &detector);
}

#[test]
fn swap_group_moves_follow_cycle_order() {
    let input = requests(&[("E2", 2, 3), ("E3", 3, 1), ("E1", 1, 2)]);
    let groups = find_swap_groups(&input).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].moves(),
        &[
            MoveRequest::new("E2", 2, 3),
            MoveRequest::new("E3", 3, 1),
            MoveRequest::new("E1", 1, 2),
        ]
    );
}

#[test]
fn dense_office_resolution_properties() {
    // Several overlapping cycles through shared buildings plus dangling requests
    let input = requests(&[
        ("A1", 1, 2),
        ("A2", 2, 3),
        ("A3", 3, 1),
        ("B1", 1, 3),
        ("B2", 3, 2),
        ("B3", 2, 1),
        ("C1", 4, 1),
        ("C2", 1, 4),
        ("C3", 4, 5),
        ("D1", 5, 6),
        ("D2", 6, 7),
        ("D3", 2, 7),
        ("D4", 7, 2),
        ("E1", 8, 9),
    ]);

    let mut detector = SwapDetector::new();
    detector.detect_in_requests(&input).unwrap();

    assert_resolution_properties(&input, &detector);
    assert!(detector.has_swaps());
    assert!(
        detector
            .unmatched()
            .iter()
            .any(|r| r.employee.as_str() == "E1")
    );
    assert_eq!(detector.pass_count(), detector.group_count() + 1);
}

#[test]
fn every_pass_strictly_shrinks_the_graph() {
    let input = requests(&[
        ("E1", 1, 2),
        ("E2", 2, 1),
        ("E3", 2, 3),
        ("E4", 3, 2),
        ("E5", 3, 1),
        ("E6", 1, 3),
    ]);
    let mut graph = SwapGraph::from_requests(&input);

    let mut previous = graph.edge_count();
    while let Some(path) = graph.detect_cycle() {
        let cycle = cyclic_segment(&path).unwrap().to_vec();
        graph.remove_cycle_edges(&cycle).unwrap();
        assert!(graph.edge_count() < previous);
        previous = graph.edge_count();
    }
    assert_eq!(graph.edge_count(), graph.remaining_requests().len());
}

#[test]
fn long_chain_resolves_without_recursion_limits() {
    let count = 20_000u64;
    let owned: Vec<(String, u64, u64)> = (0..count)
        .map(|i| (format!("E{i}"), i, (i + 1) % count))
        .collect();
    let input = RequestSet::from_requests(
        owned
            .iter()
            .map(|(employee, from, to)| MoveRequest::new(employee.as_str(), *from, *to))
            .collect(),
    )
    .unwrap();

    let groups = find_swap_groups(&input).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), count as usize);
    assert!(groups[0].is_closed());
}
