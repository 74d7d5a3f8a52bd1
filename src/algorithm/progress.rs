//! Resumen de avance del estudiante y sugerencia de matrícula.

use std::collections::HashSet;
use crate::algorithm::Curriculum;
use crate::algorithm::eligibility::is_unlocked;
use crate::algorithm::simulator::rank_candidates;
use crate::config::PlanRules;
use crate::models::{Elective, ElectiveKind, ProgressSummary, Recommendation, Subject, SubjectStatus};

/// Horas de optativas agregadas. El tope de complementarias es sólo
/// informativo: no se descuenta de `valid_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElectiveLedger {
    pub total_hours: u32,
    pub valid_hours: u32,
    pub complementary_hours: u32,
    pub complementary_excess: u32,
}

impl ElectiveLedger {
    pub fn from_records(electives: &[Elective], rules: &PlanRules) -> Self {
        let total_hours: u32 = electives.iter().map(|e| e.hours).sum();
        let complementary_hours: u32 = electives
            .iter()
            .filter(|e| e.kind == ElectiveKind::Complementary)
            .map(|e| e.hours)
            .sum();

        ElectiveLedger {
            total_hours,
            valid_hours: total_hours.min(rules.required_elective_hours),
            complementary_hours,
            complementary_excess: complementary_hours.saturating_sub(rules.max_complementary_hours),
        }
    }
}

/// Asignaturas disponibles ordenadas con la misma prioridad que usa la
/// simulación (peso DESC, período ASC).
pub fn recommendations(curriculum: &Curriculum, completed: &HashSet<String>) -> Vec<Recommendation> {
    let mut available: Vec<&Subject> = curriculum
        .subjects()
        .iter()
        .filter(|s| !completed.contains(&s.code) && is_unlocked(s, completed))
        .collect();
    rank_candidates(curriculum, &mut available);

    let rules = curriculum.rules();
    available
        .into_iter()
        .map(|s| Recommendation {
            code: s.code.clone(),
            name: s.name.clone(),
            period: s.period,
            chain_weight: curriculum.chain_weight(&s.code),
            weekly_hours: rules.effective_weekly_load(s.hours),
        })
        .collect()
}

pub fn summarize(curriculum: &Curriculum, completed: &HashSet<String>, electives: &[Elective]) -> ProgressSummary {
    let rules = curriculum.rules();
    let ledger = ElectiveLedger::from_records(electives, rules);
    let analysis = curriculum.analyze_all(completed);

    let mut completed_count = 0usize;
    let mut available_count = 0usize;
    let mut blocked_count = 0usize;
    let mut completed_hours = ledger.valid_hours;
    let mut total_hours = rules.required_elective_hours;

    for item in analysis.values().flatten() {
        total_hours += item.subject.hours;
        match item.status {
            SubjectStatus::Completed => {
                completed_count += 1;
                completed_hours += item.subject.hours;
            }
            SubjectStatus::Available => available_count += 1,
            SubjectStatus::Blocked => blocked_count += 1,
        }
    }

    let percent = if total_hours == 0 {
        0
    } else {
        (completed_hours as f64 / total_hours as f64 * 100.0).round() as u32
    };

    ProgressSummary {
        completed_hours,
        total_hours,
        percent,
        completed_count,
        available_count,
        blocked_count,
        elective_hours: ledger.total_hours,
        valid_elective_hours: ledger.valid_hours,
        complementary_hours: ledger.complementary_hours,
        complementary_excess: ledger.complementary_excess,
        estimate: curriculum.simulate(completed, ledger.valid_hours),
    }
}
