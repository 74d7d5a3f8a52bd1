use thiserror::Error;

/// Errores de carga/validación de la malla. El motor de análisis en sí no
/// falla: estos errores se detectan antes de construir `Curriculum`.
#[derive(Debug, Error)]
pub enum CurriculumError {
    #[error("la malla no contiene asignaturas")]
    EmptyDataset,

    #[error("código de asignatura duplicado: {0}")]
    DuplicateCode(String),

    #[error("asignatura {code}: período {period} fuera de 1..={total}")]
    PeriodOutOfRange { code: String, period: u32, total: u32 },

    #[error("asignatura {0}: carga horaria cero")]
    ZeroHours(String),

    #[error("asignatura {subject}: prerequisito desconocido {missing}")]
    DanglingPrerequisite { subject: String, missing: String },

    #[error("ciclo de prerequisitos que involucra {0}")]
    CycleDetected(String),

    #[error("fila {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error leyendo Excel: {0}")]
    Excel(String),
}
