//! Análisis de toda la malla agrupado por período.

use std::collections::{BTreeMap, HashSet};
use crate::algorithm::Curriculum;
use crate::algorithm::eligibility;
use crate::models::{Subject, SubjectAnalysis};

/// Analiza una asignatura. El peso de cadena se adjunta siempre, también
/// para las aprobadas.
pub fn analyze_subject(curriculum: &Curriculum, subject: &Subject, completed: &HashSet<String>) -> SubjectAnalysis {
    let (status, missing_prerequisites) = eligibility::resolve(subject, completed);
    SubjectAnalysis {
        subject: subject.clone(),
        status,
        missing_prerequisites,
        chain_weight: curriculum.chain_weight(&subject.code),
    }
}

/// Aplica el resolutor a toda la malla. Todas las claves `1..=total_periods`
/// están presentes aunque queden vacías; dentro de cada período se respeta el
/// orden del dataset.
pub fn analyze_all(curriculum: &Curriculum, completed: &HashSet<String>) -> BTreeMap<u32, Vec<SubjectAnalysis>> {
    let mut result: BTreeMap<u32, Vec<SubjectAnalysis>> = BTreeMap::new();
    for period in 1..=curriculum.rules().total_periods {
        result.insert(period, Vec::new());
    }

    for subject in curriculum.subjects() {
        let analysis = analyze_subject(curriculum, subject, completed);
        result.entry(subject.period).or_default().push(analysis);
    }

    result
}
