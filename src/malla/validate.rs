use std::collections::HashMap;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::warn;
use crate::config::PlanRules;
use crate::error::CurriculumError;
use crate::models::Subject;

/// Chequea la integridad de la malla: códigos únicos, períodos en rango,
/// horas positivas, prerequisitos existentes y ausencia de ciclos.
pub fn validate(subjects: &[Subject], rules: &PlanRules) -> Result<(), CurriculumError> {
    if subjects.is_empty() {
        return Err(CurriculumError::EmptyDataset);
    }

    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

    for s in subjects.iter() {
        if node_map.contains_key(s.code.as_str()) {
            return Err(CurriculumError::DuplicateCode(s.code.clone()));
        }
        if s.period < 1 || s.period > rules.total_periods {
            return Err(CurriculumError::PeriodOutOfRange {
                code: s.code.clone(),
                period: s.period,
                total: rules.total_periods,
            });
        }
        if s.hours == 0 {
            return Err(CurriculumError::ZeroHours(s.code.clone()));
        }
        let idx = graph.add_node(s.code.as_str());
        node_map.insert(s.code.as_str(), idx);
    }

    // Aristas prerequisito -> asignatura
    for s in subjects.iter() {
        let to = node_map[s.code.as_str()];
        for prereq in s.prerequisites.iter().flatten() {
            let from = match node_map.get(prereq.as_str()) {
                Some(&idx) => idx,
                None => {
                    warn!(subject = %s.code, missing = %prereq, "prerequisito fuera de la malla");
                    return Err(CurriculumError::DanglingPrerequisite {
                        subject: s.code.clone(),
                        missing: prereq.clone(),
                    });
                }
            };
            if graph.find_edge(from, to).is_none() {
                graph.add_edge(from, to, ());
            }
        }
    }

    toposort(&graph, None)
        .map(|_| ())
        .map_err(|cycle| CurriculumError::CycleDetected(graph[cycle.node_id()].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PlanRules {
        PlanRules { total_periods: 3, ..PlanRules::default() }
    }

    #[test]
    fn test_valid_malla() {
        let subjects = vec![
            Subject::new("A", "A", 1, 72, &[]),
            Subject::new("B", "B", 2, 72, &[&["A"], &["A"]]),
        ];
        assert!(validate(&subjects, &rules()).is_ok());
    }

    #[test]
    fn test_empty() {
        assert!(matches!(validate(&[], &rules()), Err(CurriculumError::EmptyDataset)));
    }

    #[test]
    fn test_duplicate_code() {
        let subjects = vec![Subject::new("A", "A", 1, 72, &[]), Subject::new("A", "A2", 2, 72, &[])];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::DuplicateCode(c)) if c == "A"));
    }

    #[test]
    fn test_period_out_of_range() {
        let subjects = vec![Subject::new("A", "A", 4, 72, &[])];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::PeriodOutOfRange { period: 4, .. })));
        let subjects = vec![Subject::new("A", "A", 0, 72, &[])];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::PeriodOutOfRange { period: 0, .. })));
    }

    #[test]
    fn test_zero_hours() {
        let subjects = vec![Subject::new("A", "A", 1, 0, &[])];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::ZeroHours(_))));
    }

    #[test]
    fn test_dangling_prerequisite() {
        let subjects = vec![Subject::new("B", "B", 2, 72, &[&["GHOST"]])];
        match validate(&subjects, &rules()) {
            Err(CurriculumError::DanglingPrerequisite { subject, missing }) => {
                assert_eq!(subject, "B");
                assert_eq!(missing, "GHOST");
            }
            other => panic!("se esperaba DanglingPrerequisite, obtuvo {:?}", other),
        }
    }

    #[test]
    fn test_cycle_detected() {
        let subjects = vec![
            Subject::new("X", "X", 1, 72, &[&["Y"]]),
            Subject::new("Y", "Y", 1, 72, &[&["X"]]),
        ];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::CycleDetected(_))));
    }

    #[test]
    fn test_self_loop_detected() {
        let subjects = vec![Subject::new("X", "X", 1, 72, &[&["X"]])];
        assert!(matches!(validate(&subjects, &rules()), Err(CurriculumError::CycleDetected(c)) if c == "X"));
    }
}
