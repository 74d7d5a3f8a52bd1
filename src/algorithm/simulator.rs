// simulator.rs - Proyección de semestres restantes hasta egresar.
//
// Simulación voraz por rondas (una ronda = un período):
//   1. calcular candidatas (no aprobadas y con algún grupo de prerequisitos completo)
//   2. ordenar por peso de cadena DESC y período nominal ASC
//   3. llenar el período first-fit sin superar la carga semanal máxima
//   4. la capacidad sobrante se usa para optativas
//   5. marcar admitidas como aprobadas y repetir
//
// El empaquetado es deliberadamente first-fit y no óptimo: los conteos
// esperados están calibrados con este comportamiento.

use std::collections::HashSet;
use tracing::{debug, warn};
use crate::algorithm::Curriculum;
use crate::algorithm::eligibility::is_unlocked;
use crate::models::{PeriodPlan, SemesterEstimate, Subject, Termination};

/// Ordena candidatas por prioridad de matrícula. El orden es estable, así que
/// los empates completos conservan el orden del dataset.
pub fn rank_candidates<'a>(curriculum: &Curriculum, candidates: &mut [&'a Subject]) {
    candidates.sort_by(|a, b| {
        curriculum
            .chain_weight(&b.code)
            .cmp(&curriculum.chain_weight(&a.code))
            .then(a.period.cmp(&b.period))
    });
}

/// Empaquetado first-fit: recorre `ranked` y admite cada asignatura si su
/// carga semanal efectiva cabe en lo que queda. Devuelve (admitidas, carga).
pub fn pack_period<'a>(curriculum: &Curriculum, ranked: &[&'a Subject]) -> (Vec<&'a Subject>, f64) {
    let rules = curriculum.rules();
    let mut load = 0.0f64;
    let mut admitted: Vec<&'a Subject> = Vec::new();

    for subject in ranked.iter() {
        let effective = rules.effective_weekly_load(subject.hours);
        if load + effective <= rules.max_weekly_hours {
            load += effective;
            admitted.push(*subject);
        }
    }

    (admitted, load)
}

pub fn simulate(curriculum: &Curriculum, completed: &HashSet<String>, completed_elective_hours: u32) -> SemesterEstimate {
    let rules = curriculum.rules();
    let total = curriculum.subjects().len();

    // Copia privada; los códigos que no existen en la malla no cuentan para el avance
    let mut done: HashSet<String> = completed
        .iter()
        .filter(|code| curriculum.contains(code))
        .cloned()
        .collect();

    let mut remaining_electives = rules.required_elective_hours.saturating_sub(completed_elective_hours) as f64;
    let mut periods: u32 = 0;
    let mut rounds: u32 = 0;
    let mut plan: Vec<PeriodPlan> = Vec::new();
    let mut termination: Option<Termination> = None;

    while done.len() < total && rounds < rules.safety_limit {
        rounds += 1;
        periods += 1;

        let mut candidates: Vec<&Subject> = curriculum
            .subjects()
            .iter()
            .filter(|s| !done.contains(&s.code) && is_unlocked(s, &done))
            .collect();

        if candidates.is_empty() {
            let pending: Vec<String> = curriculum
                .subjects()
                .iter()
                .filter(|s| !done.contains(&s.code))
                .map(|s| s.code.clone())
                .collect();
            warn!(round = rounds, pending = pending.len(), "simulación bloqueada: ninguna asignatura pendiente es elegible");
            termination = Some(Termination::Deadlock { pending });
            break;
        }

        rank_candidates(curriculum, &mut candidates);
        let (admitted, load) = pack_period(curriculum, &candidates);

        let spare_weekly = rules.max_weekly_hours - load;
        let mut absorbed = 0.0f64;
        if remaining_electives > 0.0 && spare_weekly > 0.0 {
            absorbed = (spare_weekly * rules.weeks_per_period).min(remaining_electives);
            remaining_electives -= absorbed;
        }

        let admitted_codes: Vec<String> = admitted.iter().map(|s| s.code.clone()).collect();
        debug!(
            round = rounds,
            candidates = candidates.len(),
            admitted = admitted_codes.len(),
            weekly_load = load,
            remaining_electives,
            "período simulado"
        );

        plan.push(PeriodPlan {
            index: rounds,
            admitted: admitted_codes.clone(),
            weekly_load: load,
            elective_hours_absorbed: absorbed,
        });

        if admitted_codes.is_empty() {
            warn!(round = rounds, "ninguna candidata cabe en la carga semanal; se corta la simulación");
            termination = Some(Termination::Stalled);
            break;
        }
        done.extend(admitted_codes);
    }

    let termination = match termination {
        Some(t) => t,
        None if done.len() >= total => Termination::Completed,
        None => {
            warn!(limit = rules.safety_limit, "simulación truncada por el tope de rondas");
            Termination::SafetyLimit
        }
    };

    let mut elective_only_periods = 0u32;
    if remaining_electives > 0.0 {
        elective_only_periods = (remaining_electives / rules.hours_per_period()).ceil() as u32;
        periods += elective_only_periods;
    }

    SemesterEstimate {
        periods,
        termination,
        elective_only_periods,
        plan,
    }
}
