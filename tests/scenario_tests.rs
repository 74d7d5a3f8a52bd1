use mallaplan::Curriculum;
use mallaplan::config::PlanRules;
use mallaplan::models::{Subject, SubjectStatus};
use std::collections::HashSet;

fn set(codes: &[&str]) -> HashSet<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// A (sin prerequisitos) desbloquea B y C; 72 h = 4 h/semana cada una.
fn abc(cap: f64) -> Curriculum {
    let rules = PlanRules {
        total_periods: 2,
        max_weekly_hours: cap,
        required_elective_hours: 0,
        ..PlanRules::default()
    };
    let subjects = vec![
        Subject::new("A", "A", 1, 72, &[]),
        Subject::new("B", "B", 2, 72, &[&["A"]]),
        Subject::new("C", "C", 2, 72, &[&["A"]]),
    ];
    Curriculum::new(subjects, rules).expect("malla válida")
}

#[test]
fn test_abc_first_period_only_root() {
    let cur = abc(10.0);
    assert_eq!(cur.chain_weight("A"), 2);

    let out = cur.analyze_all(&HashSet::new());
    assert_eq!(out[&1][0].status, SubjectStatus::Available);
    assert!(out[&2].iter().all(|a| a.status == SubjectStatus::Blocked));

    let est = cur.simulate(&HashSet::new(), 0);
    assert_eq!(est.plan[0].admitted, vec!["A".to_string()]);
    assert_eq!(est.plan[1].admitted, vec!["B".to_string(), "C".to_string()]);
    assert_eq!(est.periods, 2);
}

#[test]
fn test_abc_tight_cap_one_per_period() {
    let cur = abc(4.0);
    assert_eq!(cur.minimum_remaining_periods(&HashSet::new(), 0), 3);
    assert_eq!(cur.minimum_remaining_periods(&set(&["A"]), 0), 2);
    assert_eq!(cur.minimum_remaining_periods(&set(&["A", "B", "C"]), 0), 0);
}

fn or_curriculum() -> Curriculum {
    let rules = PlanRules { total_periods: 2, ..PlanRules::default() };
    let subjects = vec![
        Subject::new("X", "X", 1, 54, &[]),
        Subject::new("Y", "Y", 1, 54, &[]),
        Subject::new("Z", "Z", 1, 54, &[]),
        Subject::new("S", "S", 2, 72, &[&["X", "Y"], &["Z"]]),
    ];
    Curriculum::new(subjects, rules).expect("malla válida")
}

#[test]
fn test_or_groups_short_circuit() {
    let cur = or_curriculum();
    let out = cur.analyze_all(&set(&["Z"]));
    let s = &out[&2][0];
    assert_eq!(s.status, SubjectStatus::Available);
    assert!(s.missing_prerequisites.is_empty());
}

#[test]
fn test_or_groups_first_group_wins() {
    let cur = or_curriculum();
    let out = cur.analyze_all(&set(&["X"]));
    let s = &out[&2][0];
    assert_eq!(s.status, SubjectStatus::Blocked);
    assert_eq!(s.missing_prerequisites, vec!["Y".to_string()]);
}

#[test]
fn test_recommendations_follow_priority() {
    let cur = or_curriculum();
    // X, Y, Z pesan 1 cada uno: el empate completo conserva el orden del dataset
    let recs = cur.recommendations(&HashSet::new());
    let codes: Vec<&str> = recs.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["X", "Y", "Z"]);
}
