//! Estado de una asignatura frente a un conjunto de aprobados.
//!
//! Regla: (grupo A) OR (grupo B) ..., y dentro de cada grupo AND. Cuando la
//! asignatura queda bloqueada se reportan los faltantes del PRIMER grupo en
//! orden declarado (no el grupo con menos faltantes).

use std::collections::HashSet;
use crate::models::{Subject, SubjectStatus};

/// `true` si algún grupo de prerequisitos está completo (o no hay ninguno).
pub fn is_unlocked(subject: &Subject, completed: &HashSet<String>) -> bool {
    subject.prerequisites.is_empty()
        || subject
            .prerequisites
            .iter()
            .any(|group| group.iter().all(|code| completed.contains(code)))
}

/// Clasifica `subject` y devuelve los prerequisitos faltantes a mostrar.
pub fn resolve(subject: &Subject, completed: &HashSet<String>) -> (SubjectStatus, Vec<String>) {
    if completed.contains(&subject.code) {
        return (SubjectStatus::Completed, Vec::new());
    }

    let mut first_missing: Vec<String> = Vec::new();
    for group in subject.prerequisites.iter() {
        let missing: Vec<String> = group
            .iter()
            .filter(|code| !completed.contains(*code))
            .cloned()
            .collect();

        if missing.is_empty() {
            return (SubjectStatus::Available, Vec::new());
        }
        if first_missing.is_empty() {
            first_missing = missing;
        }
    }

    if subject.prerequisites.is_empty() {
        (SubjectStatus::Available, Vec::new())
    } else {
        (SubjectStatus::Blocked, first_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn or_subject() -> Subject {
        Subject::new("S", "S", 3, 54, &[&["X", "Y"], &["Z"]])
    }

    #[test]
    fn test_second_group_satisfied_is_available() {
        let (status, missing) = resolve(&or_subject(), &set(&["Z"]));
        assert_eq!(status, SubjectStatus::Available);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_first_group_wins_when_blocked() {
        let (status, missing) = resolve(&or_subject(), &set(&["X"]));
        assert_eq!(status, SubjectStatus::Blocked);
        assert_eq!(missing, vec!["Y".to_string()]);
    }

    #[test]
    fn test_nothing_completed_reports_whole_first_group() {
        let (status, missing) = resolve(&or_subject(), &HashSet::new());
        assert_eq!(status, SubjectStatus::Blocked);
        assert_eq!(missing, vec!["X".to_string(), "Y".to_string()]);
    }

    #[test]
    fn test_completed_wins_over_prereqs() {
        let (status, missing) = resolve(&or_subject(), &set(&["S"]));
        assert_eq!(status, SubjectStatus::Completed);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_no_prereqs_available() {
        let s = Subject::new("F", "F", 1, 72, &[]);
        assert_eq!(resolve(&s, &HashSet::new()).0, SubjectStatus::Available);
        assert!(is_unlocked(&s, &HashSet::new()));
    }

    #[test]
    fn test_is_unlocked_matches_resolve() {
        let s = or_subject();
        assert!(!is_unlocked(&s, &set(&["X"])));
        assert!(is_unlocked(&s, &set(&["X", "Y"])));
        assert!(is_unlocked(&s, &set(&["Z"])));
    }
}
