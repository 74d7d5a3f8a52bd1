//! Mapa de dependencias inverso: asignatura -> asignaturas que la exigen.

use std::collections::{HashMap, HashSet};
use crate::models::Subject;

/// Mapa inmutable codigo -> dependientes directos, en el orden del dataset.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    dependents: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    /// Construye el mapa recorriendo la malla en orden. Un código que aparece
    /// en varios grupos de la misma asignatura genera una sola arista.
    pub fn build(subjects: &[Subject]) -> Self {
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

        for subject in subjects {
            let mut seen: HashSet<&str> = HashSet::new();
            for group in subject.prerequisites.iter() {
                for prereq in group.iter() {
                    if !seen.insert(prereq.as_str()) { continue; }
                    dependents.entry(prereq.clone()).or_default().push(subject.code.clone());
                }
            }
        }

        DependencyMap { dependents }
    }

    /// Dependientes directos de `code` (vacío si nadie lo exige).
    pub fn dependents_of(&self, code: &str) -> &[String] {
        self.dependents.get(code).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}
