// Motor de análisis de la malla.
//
// Flujo: dataset -> DependencyMap -> {pesos de cadena, elegibilidad}
//        -> analyzer (foto por llamada) -> simulator (fotos iteradas)
//
// `Curriculum` es el único punto de entrada: se construye una vez por malla
// cargada y después sólo se lee, así que puede compartirse entre hilos.
pub mod analyzer;
pub mod chain;
pub mod eligibility;
pub mod graph;
pub mod progress;
pub mod simulator;

use std::collections::{BTreeMap, HashMap, HashSet};
use crate::config::PlanRules;
use crate::error::CurriculumError;
use crate::models::{Elective, ProgressSummary, Recommendation, SemesterEstimate, Subject, SubjectAnalysis};

pub use graph::DependencyMap;

#[derive(Debug, Clone)]
pub struct Curriculum {
    subjects: Vec<Subject>,
    index: HashMap<String, usize>,
    deps: DependencyMap,
    weights: HashMap<String, usize>,
    rules: PlanRules,
}

impl Curriculum {
    /// Valida la malla y precalcula el mapa de dependencias y los pesos.
    pub fn new(subjects: Vec<Subject>, rules: PlanRules) -> Result<Self, CurriculumError> {
        crate::malla::validate(&subjects, &rules)?;
        Ok(Self::new_unchecked(subjects, rules))
    }

    /// Construye sin validar. Los algoritmos siguen siendo totales sobre una
    /// malla con ciclos o referencias colgantes (resultados degradados).
    pub fn new_unchecked(subjects: Vec<Subject>, rules: PlanRules) -> Self {
        let deps = DependencyMap::build(&subjects);
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut weights: HashMap<String, usize> = HashMap::new();
        for (i, s) in subjects.iter().enumerate() {
            index.entry(s.code.clone()).or_insert(i);
            weights.insert(s.code.clone(), chain::chain_weight(&deps, &s.code));
        }

        Curriculum { subjects, index, deps, weights, rules }
    }

    /// Malla incorporada (Engenharia Civil) con las reglas por defecto.
    pub fn builtin() -> Result<Self, CurriculumError> {
        Self::new(crate::malla::builtin()?, PlanRules::default())
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn rules(&self) -> &PlanRules {
        &self.rules
    }

    pub fn dependency_map(&self) -> &DependencyMap {
        &self.deps
    }

    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.index.get(code).map(|&i| &self.subjects[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn chain_weight(&self, code: &str) -> usize {
        match self.weights.get(code) {
            Some(w) => *w,
            None => chain::chain_weight(&self.deps, code),
        }
    }

    pub fn analyze_subject(&self, subject: &Subject, completed: &HashSet<String>) -> SubjectAnalysis {
        analyzer::analyze_subject(self, subject, completed)
    }

    pub fn analyze_all(&self, completed: &HashSet<String>) -> BTreeMap<u32, Vec<SubjectAnalysis>> {
        analyzer::analyze_all(self, completed)
    }

    pub fn simulate(&self, completed: &HashSet<String>, completed_elective_hours: u32) -> SemesterEstimate {
        simulator::simulate(self, completed, completed_elective_hours)
    }

    /// Versión entera de `simulate`; no distingue estimaciones truncadas.
    pub fn minimum_remaining_periods(&self, completed: &HashSet<String>, completed_elective_hours: u32) -> u32 {
        self.simulate(completed, completed_elective_hours).periods
    }

    pub fn recommendations(&self, completed: &HashSet<String>) -> Vec<Recommendation> {
        progress::recommendations(self, completed)
    }

    pub fn progress(&self, completed: &HashSet<String>, electives: &[Elective]) -> ProgressSummary {
        progress::summarize(self, completed, electives)
    }
}
