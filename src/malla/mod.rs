//! Módulo `malla`: carga y validación del dataset de asignaturas.
//!
//! Submódulos:
//! - `excel`: lectura de mallas desde planillas (calamine)
//! - `validate`: chequeos de integridad previos a cualquier análisis

mod excel;
mod validate;

pub use excel::{leer_malla_excel, parse_prerequisites};
pub use validate::validate;

use std::path::Path;
use tracing::info;
use crate::error::CurriculumError;
use crate::models::Subject;

/// Malla incorporada: Engenharia Civil (UFSC), 10 fases.
const BUILTIN_MALLA_JSON: &str = include_str!("datos/ecv_ufsc.json");

pub fn builtin() -> Result<Vec<Subject>, CurriculumError> {
    from_json_str(BUILTIN_MALLA_JSON)
}

/// Parsea un arreglo JSON de asignaturas. Los códigos (propios y de
/// prerequisitos) se normalizan a mayúsculas igual que en la lectura Excel.
pub fn from_json_str(json_str: &str) -> Result<Vec<Subject>, CurriculumError> {
    let mut subjects = serde_json::from_str::<Vec<Subject>>(json_str)?;
    for subject in subjects.iter_mut() {
        normalize_codes(subject);
    }
    Ok(subjects)
}

fn normalize_codes(subject: &mut Subject) {
    subject.code = subject.code.trim().to_uppercase();
    for group in subject.prerequisites.iter_mut() {
        for code in group.iter_mut() {
            *code = code.trim().to_uppercase();
        }
    }
}

pub fn leer_malla_json<P: AsRef<Path>>(path: P) -> Result<Vec<Subject>, CurriculumError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    from_json_str(&contents)
}

/// Carga una malla eligiendo el lector según la extensión del archivo.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Subject>, CurriculumError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let subjects = match ext.as_str() {
        "xlsx" | "xls" | "xlsm" | "ods" => leer_malla_excel(path, None)?,
        _ => leer_malla_json(path)?,
    };
    info!(path = %path.display(), subjects = subjects.len(), "malla cargada");
    Ok(subjects)
}
