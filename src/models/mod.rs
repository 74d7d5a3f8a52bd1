// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Asignatura de la malla (registro estático del dataset).
///
/// `prerequisites` es una disyunción de conjunciones: la asignatura se
/// desbloquea si TODOS los códigos de ALGÚN grupo están aprobados. Una lista
/// vacía significa "sin prerequisitos".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    /// Fase/semestre nominal (1..N)
    pub period: u32,
    /// Carga horaria total (H/A)
    pub hours: u32,
    #[serde(default)]
    pub prerequisites: Vec<Vec<String>>,
}

impl Subject {
    pub fn new(code: &str, name: &str, period: u32, hours: u32, prerequisites: &[&[&str]]) -> Self {
        Subject {
            code: code.to_string(),
            name: name.to_string(),
            period,
            hours,
            prerequisites: prerequisites
                .iter()
                .map(|g| g.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectStatus {
    Completed,
    Available,
    Blocked,
}

/// Resultado derivado por asignatura; se recalcula en cada llamada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAnalysis {
    pub subject: Subject,
    pub status: SubjectStatus,
    /// Códigos faltantes del primer grupo no satisfecho (vacío salvo `Blocked`)
    pub missing_prerequisites: Vec<String>,
    pub chain_weight: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectiveKind {
    Discipline,
    Complementary,
}

/// Registro de optativa cursada. Sólo las horas agregadas influyen en la
/// simulación; el tipo sirve para el tope informativo de complementarias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elective {
    pub id: String,
    pub name: String,
    pub hours: u32,
    #[serde(rename = "type")]
    pub kind: ElectiveKind,
}

/// Un período simulado: qué se admitió y cuánta carga semanal ocupó.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodPlan {
    pub index: u32,
    pub admitted: Vec<String>,
    pub weekly_load: f64,
    pub elective_hours_absorbed: f64,
}

/// Cómo terminó la simulación. Sólo `Completed` da un conteo exacto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    Completed,
    /// Ninguna asignatura pendiente quedó elegible
    Deadlock { pending: Vec<String> },
    /// Se alcanzó el tope de rondas
    SafetyLimit,
    /// Había candidatas pero ninguna cupo en la carga semanal
    Stalled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterEstimate {
    pub periods: u32,
    pub termination: Termination,
    /// Períodos extra dedicados sólo a optativas tras la simulación
    pub elective_only_periods: u32,
    pub plan: Vec<PeriodPlan>,
}

impl SemesterEstimate {
    pub fn is_exact(&self) -> bool {
        self.termination == Termination::Completed
    }
}

/// Asignatura disponible con su prioridad de matrícula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub code: String,
    pub name: String,
    pub period: u32,
    pub chain_weight: usize,
    pub weekly_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub completed_hours: u32,
    pub total_hours: u32,
    pub percent: u32,
    pub completed_count: usize,
    pub available_count: usize,
    pub blocked_count: usize,
    pub elective_hours: u32,
    pub valid_elective_hours: u32,
    pub complementary_hours: u32,
    pub complementary_excess: u32,
    pub estimate: SemesterEstimate,
}
