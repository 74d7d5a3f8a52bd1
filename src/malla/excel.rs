use std::path::Path;
use calamine::{open_workbook_auto, Data, Reader};
use crate::error::CurriculumError;
use crate::models::Subject;

/// Convierte un `Data` de calamine a String
fn data_to_string(d: &Data) -> String {
    match d {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "1".to_string() } else { "0".to_string() },
        _ => String::new(),
    }
}

/// Minúsculas, sin tildes ni espacios: "Código " -> "codigo"
fn normalize_header(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Índices de columna detectados en la fila de encabezados.
#[derive(Debug, Default, PartialEq)]
struct Columns {
    code: Option<usize>,
    name: Option<usize>,
    period: Option<usize>,
    hours: Option<usize>,
    prerequisites: Option<usize>,
}

fn detect_columns(headers: &[String]) -> Columns {
    let mut cols = Columns::default();
    for (i, raw) in headers.iter().enumerate() {
        let h = normalize_header(raw);
        // el orden importa: "prerequisitos" no debe tomarse como código
        if h.contains("prereq") || h.contains("pre-req") || h.contains("requisit") {
            cols.prerequisites.get_or_insert(i);
        } else if h.contains("codigo") || h == "code" || h == "sigla" {
            cols.code.get_or_insert(i);
        } else if h.contains("nombre") || h == "name" || h == "nome" || h == "asignatura" || h == "disciplina" {
            cols.name.get_or_insert(i);
        } else if h.contains("periodo") || h.contains("fase") || h == "period" || h == "phase" || h.contains("semestre") {
            cols.period.get_or_insert(i);
        } else if h.contains("hora") || h == "hours" || h.contains("carga") {
            cols.hours.get_or_insert(i);
        }
    }
    cols
}

/// Parsea la celda de prerequisitos: grupos separados por `|` (OR), códigos
/// dentro de cada grupo separados por `,`, `;` o `+` (AND).
///
/// `"X, Y | Z"` -> `[["X","Y"],["Z"]]`. Vacío o `-` significa sin prerequisitos.
pub fn parse_prerequisites(cell: &str) -> Vec<Vec<String>> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Vec::new();
    }

    trimmed
        .split('|')
        .map(|group| {
            group
                .split(|c: char| c == ',' || c == ';' || c == '+')
                .map(|code| code.trim().to_uppercase())
                .filter(|code| !code.is_empty())
                .collect::<Vec<String>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Entero no negativo; "72.0" se acepta, "1.5" no.
fn parse_number(raw: &str, row: usize, field: &str) -> Result<u32, CurriculumError> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
        .ok_or_else(|| CurriculumError::InvalidRow { row, reason: format!("{} inválido: '{}'", field, raw) })
}

/// Lee una malla desde una planilla. La primera fila es de encabezados; si
/// no se indica `sheet` se usa la primera hoja.
pub fn leer_malla_excel<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<Subject>, CurriculumError> {
    let mut workbook = open_workbook_auto(path.as_ref()).map_err(|e| CurriculumError::Excel(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let sheet_name = match sheet {
        Some(s) => s.to_string(),
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| CurriculumError::Excel("no se encontraron hojas en el archivo".to_string()))?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| CurriculumError::Excel(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(data_to_string).collect())
        .collect();
    rows_to_subjects(&rows)
}

/// Convierte filas ya leídas (encabezado incluido) en asignaturas.
fn rows_to_subjects(rows: &[Vec<String>]) -> Result<Vec<Subject>, CurriculumError> {
    let Some(header) = rows.first() else {
        return Ok(Vec::new());
    };
    let cols = detect_columns(header);
    let code_idx = cols.code.ok_or_else(|| CurriculumError::Excel("falta la columna de código".to_string()))?;
    let period_idx = cols.period.ok_or_else(|| CurriculumError::Excel("falta la columna de período".to_string()))?;
    let hours_idx = cols.hours.ok_or_else(|| CurriculumError::Excel("falta la columna de horas".to_string()))?;

    let cell = |row: &Vec<String>, idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    let mut subjects: Vec<Subject> = Vec::new();
    for (row_idx, row) in rows.iter().enumerate().skip(1) {
        let code = cell(row, Some(code_idx)).trim().to_uppercase();
        if code.is_empty() { continue; }

        let line = row_idx + 1;
        let name = cell(row, cols.name);
        subjects.push(Subject {
            name: if name.is_empty() { code.clone() } else { name },
            period: parse_number(&cell(row, Some(period_idx)), line, "período")?,
            hours: parse_number(&cell(row, Some(hours_idx)), line, "horas")?,
            prerequisites: parse_prerequisites(&cell(row, cols.prerequisites)),
            code,
        });
    }

    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_prerequisites_groups() {
        assert_eq!(
            parse_prerequisites("ecv2401, ECV2404 | mtm3103"),
            vec![
                vec!["ECV2401".to_string(), "ECV2404".to_string()],
                vec!["MTM3103".to_string()],
            ]
        );
        assert_eq!(parse_prerequisites("A+B;C"), vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]);
        assert!(parse_prerequisites("").is_empty());
        assert!(parse_prerequisites(" - ").is_empty());
        assert!(parse_prerequisites(" | ").is_empty());
    }

    #[test]
    fn test_detect_columns_portuguese_and_spanish() {
        let cols = detect_columns(&row(&["Código", "Nome", "Fase", "Carga Horária", "Pré-requisitos"]));
        assert_eq!(cols, Columns { code: Some(0), name: Some(1), period: Some(2), hours: Some(3), prerequisites: Some(4) });

        let cols = detect_columns(&row(&["Prerequisitos", "Horas", "Periodo", "Nombre", "Codigo"]));
        assert_eq!(cols, Columns { code: Some(4), name: Some(3), period: Some(2), hours: Some(1), prerequisites: Some(0) });
    }

    #[test]
    fn test_asignatura_header_is_the_name() {
        let cols = detect_columns(&row(&["Sigla", "Asignatura", "Semestre", "Horas"]));
        assert_eq!(cols, Columns { code: Some(0), name: Some(1), period: Some(2), hours: Some(3), prerequisites: None });
    }

    #[test]
    fn test_parse_number_rejects_fractions() {
        assert_eq!(parse_number("72.0", 2, "horas").expect("entero"), 72);
        assert_eq!(parse_number(" 3 ", 2, "período").expect("entero"), 3);
        assert!(matches!(parse_number("1.5", 2, "período"), Err(CurriculumError::InvalidRow { row: 2, .. })));
        assert!(matches!(parse_number("72,4", 3, "horas"), Err(CurriculumError::InvalidRow { row: 3, .. })));
        assert!(parse_number("-1", 2, "horas").is_err());
    }

    #[test]
    fn test_rows_to_subjects() {
        let rows = vec![
            row(&["codigo", "nombre", "periodo", "horas", "prerequisitos"]),
            row(&["mtm3110", "Cálculo 1", "1", "72", ""]),
            row(&["", "fila vacía", "", "", ""]),
            row(&["MTM3120", "Cálculo 2", "2", "72.0", "MTM3110"]),
        ];
        let subjects = rows_to_subjects(&rows).expect("filas válidas");
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].code, "MTM3110");
        assert_eq!(subjects[1].hours, 72);
        assert_eq!(subjects[1].prerequisites, vec![vec!["MTM3110".to_string()]]);
    }

    #[test]
    fn test_rows_bad_number() {
        let rows = vec![
            row(&["codigo", "periodo", "horas"]),
            row(&["A", "uno", "72"]),
        ];
        assert!(matches!(rows_to_subjects(&rows), Err(CurriculumError::InvalidRow { row: 2, .. })));
    }

    #[test]
    fn test_rows_fractional_period() {
        let rows = vec![
            row(&["codigo", "periodo", "horas"]),
            row(&["A", "1", "72"]),
            row(&["B", "1.5", "72"]),
        ];
        assert!(matches!(rows_to_subjects(&rows), Err(CurriculumError::InvalidRow { row: 3, .. })));
    }

    #[test]
    fn test_missing_workbook() {
        assert!(matches!(leer_malla_excel("no/existe.xlsx", None), Err(CurriculumError::Excel(_))));
    }
}
