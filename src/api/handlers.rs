//! # Handlers HTTP del Servicio
//! src/api/handlers.rs
//!
//! Implementa los endpoints del servicio:
//! - POST /calculate-ini/ : trigger del cálculo asíncrono
//! - GET  /health/        : liveness
//! - GET  /test/          : descripción de capacidades

use serde::Deserialize;

use crate::http::{Method, Request, Response, StatusCode};
use crate::jobs::types::{unix_timestamp, CalculationRequest, ResearchId};
use crate::jobs::JobRunner;

/// Body del trigger, parseado de forma laxa para validar campo a campo
#[derive(Debug, Deserialize)]
struct CalculatePayload {
    research_id: Option<ResearchId>,

    biomarker_ids: Option<Vec<u64>>,

    secret_key: Option<String>,
}

/// Handler para POST /calculate-ini/
///
/// Valida el body JSON y el secret compartido, dispara el job en
/// background y responde 202 sin esperar el cálculo.
///
/// # Respuestas
/// - 400: JSON malformado, research_id ausente o biomarker_ids vacío
/// - 401: secret_key inválido
/// - 405: método distinto de POST
/// - 202: job aceptado
///
/// # Ejemplo de response 202
/// ```json
/// {
///   "message": "INI calculation started asynchronously",
///   "research_id": 42,
///   "status": "processing",
///   "estimated_delay": "5-10 seconds",
///   "timestamp": 1735000000
/// }
/// ```
pub fn calculate_handler(req: &Request, runner: &JobRunner) -> Response {
    if req.method() != Method::POST {
        return Response::error(StatusCode::MethodNotAllowed, "Use POST");
    }

    // Parsear el body JSON
    let payload: CalculatePayload = match req
        .body_string()
        .and_then(|body| serde_json::from_str(&body).ok())
    {
        Some(payload) => payload,
        None => {
            return Response::error(StatusCode::BadRequest, "Invalid JSON");
        }
    };

    // Validación básica de campos requeridos
    let research_id = match payload.research_id {
        Some(id) => id,
        None => {
            return Response::error(StatusCode::BadRequest, "research_id is required");
        }
    };

    let biomarker_ids = match payload.biomarker_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => {
            return Response::error(StatusCode::BadRequest, "biomarker_ids is required");
        }
    };

    // Verificación del secret compartido
    if payload.secret_key.as_deref() != Some(runner.config().secret_key.as_str()) {
        return Response::error(StatusCode::Unauthorized, "Invalid secret key");
    }

    // Disparar el cálculo en background y responder de inmediato
    let request = CalculationRequest {
        research_id: research_id.clone(),
        biomarker_ids,
    };
    runner.trigger(request);

    let body = serde_json::json!({
        "message": "INI calculation started asynchronously",
        "research_id": research_id,
        "status": "processing",
        "estimated_delay": runner.config().estimated_delay(),
        "timestamp": unix_timestamp(),
    });

    Response::json_with_status(StatusCode::Accepted, &body.to_string())
}

/// Handler para GET /health/
///
/// Payload estático de liveness.
pub fn health_handler(_req: &Request) -> Response {
    let body = serde_json::json!({
        "status": "healthy",
        "service": "INI Calculator Service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": unix_timestamp(),
    });

    Response::json(&body.to_string())
}

/// Handler para GET /test/
///
/// Payload estático que describe las capacidades del servicio.
pub fn test_handler(_req: &Request) -> Response {
    let body = serde_json::json!({
        "message": "INI calculator service is running!",
        "endpoints": {
            "calculate_ini": "POST /calculate-ini/",
            "health": "GET /health/",
            "test": "GET /test/",
        },
        "timestamp": unix_timestamp(),
    });

    Response::json(&body.to_string())
}
