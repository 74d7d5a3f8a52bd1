// Biblioteca raíz del crate `mallaplan`.
// Motor de análisis de malla curricular (prerequisitos OR-de-AND, peso de
// cadena y simulación de semestres restantes) más la API HTTP que lo expone.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod malla;
pub mod models;
pub mod server;
pub mod telemetry;

pub use algorithm::Curriculum;
pub use config::PlanRules;
pub use error::CurriculumError;
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
