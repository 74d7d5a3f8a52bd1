use std::collections::{BTreeMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::algorithm::Curriculum;
use crate::models::{Elective, Subject, SubjectAnalysis};

/// Cuerpo de entrada común a los endpoints de análisis.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "completed": ["MTM3110", "FSC5101"],
///   "elective_hours": 72,
///   "electives": [
///     {"id": "e1", "name": "Libras", "hours": 72, "type": "discipline"}
///   ]
/// }
/// ```
///
/// # Campos:
/// - `completed`: códigos aprobados (se normalizan a mayúsculas)
/// - `elective_hours`: horas de optativas ya cumplidas (sólo `/semesters`)
/// - `electives`: registros de optativas (sólo `/progress`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParams {
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub elective_hours: u32,
    #[serde(default)]
    pub electives: Vec<Elective>,
}

pub fn parse_json_input(json_str: &str) -> Result<InputParams, serde_json::Error> {
    serde_json::from_str::<InputParams>(json_str)
}

impl InputParams {
    /// Conjunto de aprobados normalizado. Los códigos que no existen en la
    /// malla se descartan: nunca satisfacen ningún prerequisito.
    pub fn completed_set(&self, curriculum: &Curriculum) -> HashSet<String> {
        let mut out: HashSet<String> = HashSet::new();
        for raw in self.completed.iter() {
            let code = raw.trim().to_uppercase();
            if code.is_empty() { continue; }
            if curriculum.contains(&code) {
                out.insert(code);
            } else {
                debug!(code = %raw, "código aprobado desconocido, se ignora");
            }
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub periods: BTreeMap<u32, Vec<SubjectAnalysis>>,
}

#[derive(Debug, Serialize)]
pub struct CurriculumResponse<'a> {
    pub rules: &'a crate::config::PlanRules,
    pub periods: BTreeMap<u32, Vec<&'a Subject>>,
}

impl<'a> CurriculumResponse<'a> {
    pub fn from_curriculum(curriculum: &'a Curriculum) -> Self {
        let mut periods: BTreeMap<u32, Vec<&'a Subject>> = BTreeMap::new();
        for period in 1..=curriculum.rules().total_periods {
            periods.insert(period, Vec::new());
        }
        for s in curriculum.subjects() {
            periods.entry(s.period).or_default().push(s);
        }
        CurriculumResponse { rules: curriculum.rules(), periods }
    }
}
