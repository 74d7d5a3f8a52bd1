use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use tracing::info;
use crate::algorithm::Curriculum;
use crate::api_json::{AnalyzeResponse, CurriculumResponse, InputParams};

/// Deserializa el cuerpo como `InputParams` o responde 400.
fn parse_body(body: web::Json<serde_json::Value>) -> Result<InputParams, HttpResponse> {
    serde_json::from_value::<InputParams>(body.into_inner())
        .map_err(|e| HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})))
}

/// GET /curriculum
/// Devuelve la malla agrupada por período y las reglas del plan.
async fn curriculum_handler(curriculum: web::Data<Curriculum>) -> impl Responder {
    HttpResponse::Ok().json(CurriculumResponse::from_curriculum(&curriculum))
}

/// POST /analyze
/// Estado (completed/available/blocked) de cada asignatura por período.
async fn analyze_handler(curriculum: web::Data<Curriculum>, body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let completed = params.completed_set(&curriculum);
    HttpResponse::Ok().json(AnalyzeResponse { periods: curriculum.analyze_all(&completed) })
}

/// POST /semesters
/// Simulación de semestres restantes (incluye el plan período a período).
async fn semesters_handler(curriculum: web::Data<Curriculum>, body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let completed = params.completed_set(&curriculum);
    HttpResponse::Ok().json(curriculum.simulate(&completed, params.elective_hours))
}

/// POST /progress
async fn progress_handler(curriculum: web::Data<Curriculum>, body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let completed = params.completed_set(&curriculum);
    HttpResponse::Ok().json(curriculum.progress(&completed, &params.electives))
}

/// POST /recommendations
async fn recommendations_handler(curriculum: web::Data<Curriculum>, body: web::Json<serde_json::Value>) -> impl Responder {
    let params = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let completed = params.completed_set(&curriculum);
    HttpResponse::Ok().json(json!({"recommendations": curriculum.recommendations(&completed)}))
}

async fn help_handler() -> impl Responder {
    let example = InputParams {
        completed: vec!["MTM3110".to_string(), "FSC5101".to_string()],
        elective_hours: 72,
        electives: Vec::new(),
    };

    HttpResponse::Ok().json(json!({
        "description": "API de seguimiento de malla: estado por asignatura, prioridad de matrícula y semestres restantes estimados.",
        "routes": {
            "GET /curriculum": "malla agrupada por período y reglas del plan",
            "POST /analyze": "estado de cada asignatura para los códigos aprobados",
            "POST /semesters": "simulación de semestres restantes (usa elective_hours)",
            "POST /progress": "porcentaje de avance y resumen de optativas (usa electives)",
            "POST /recommendations": "asignaturas disponibles ordenadas por prioridad"
        },
        "post_example": example
    }))
}

/// Registra las rutas; separado de `run_server` para poder montarlo en tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/curriculum", web::get().to(curriculum_handler))
        .route("/analyze", web::post().to(analyze_handler))
        .route("/semesters", web::post().to(semesters_handler))
        .route("/progress", web::post().to(progress_handler))
        .route("/recommendations", web::post().to(recommendations_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(bind_addr: &str, curriculum: Curriculum) -> std::io::Result<()> {
    info!(bind = bind_addr, subjects = curriculum.subjects().len(), "iniciando servidor");
    let data = web::Data::new(curriculum);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
