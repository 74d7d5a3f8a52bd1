//! Constantes del plan de estudios y configuración del servidor.
//!
//! Las reglas del plan son fijas para un dataset dado; se pasan como valor a
//! `Curriculum` para que los tests puedan usar topes sintéticos.

use serde::Serialize;
use std::path::PathBuf;

pub const TOTAL_PERIODS: u32 = 10;
pub const MAX_WEEKLY_HOURS: f64 = 30.0;
/// Semanas por semestre (convierte H/A totales a carga semanal)
pub const WEEKS_PER_PERIOD: f64 = 18.0;
pub const REQUIRED_ELECTIVE_HOURS: u32 = 432;
pub const MAX_COMPLEMENTARY_HOURS: u32 = 54;
/// Sobre este total de horas (prácticas, estágio) la asignatura ocupa el período completo
pub const LARGE_LOAD_THRESHOLD: u32 = 200;
pub const SIMULATION_SAFETY_LIMIT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRules {
    pub total_periods: u32,
    pub max_weekly_hours: f64,
    pub weeks_per_period: f64,
    pub required_elective_hours: u32,
    pub max_complementary_hours: u32,
    pub large_load_threshold: u32,
    pub safety_limit: u32,
}

impl Default for PlanRules {
    fn default() -> Self {
        PlanRules {
            total_periods: TOTAL_PERIODS,
            max_weekly_hours: MAX_WEEKLY_HOURS,
            weeks_per_period: WEEKS_PER_PERIOD,
            required_elective_hours: REQUIRED_ELECTIVE_HOURS,
            max_complementary_hours: MAX_COMPLEMENTARY_HOURS,
            large_load_threshold: LARGE_LOAD_THRESHOLD,
            safety_limit: SIMULATION_SAFETY_LIMIT,
        }
    }
}

impl PlanRules {
    /// Carga semanal efectiva de una asignatura con `hours` horas totales.
    pub fn effective_weekly_load(&self, hours: u32) -> f64 {
        if hours > self.large_load_threshold {
            self.max_weekly_hours
        } else {
            hours as f64 / self.weeks_per_period
        }
    }

    /// Horas totales que caben en un período a carga completa.
    pub fn hours_per_period(&self) -> f64 {
        self.max_weekly_hours * self.weeks_per_period
    }
}

/// Configuración de ejecución del binario, leída de variables de entorno
/// (y de `.env` si existe).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub log_level: String,
    pub malla_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        // .env es opcional
        let _ = dotenv::dotenv();

        let bind_addr = std::env::var("MALLAPLAN_BIND")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let log_level = std::env::var("MALLAPLAN_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let malla_path = std::env::var("MALLAPLAN_MALLA")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        ServerConfig { bind_addr, log_level, malla_path }
    }
}
