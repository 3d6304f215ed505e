//! # Tipos del Job de Cálculo
//! src/jobs/types.rs
//!
//! Define los tipos fundamentales del cálculo asíncrono: request,
//! resultado y la máquina de estados del job.

use serde::{Deserialize, Serialize};

/// Mensaje fijo del fallo simulado de cálculo
pub const CALCULATION_FAILED_MESSAGE: &str = "Calculation failed due to insufficient data";

/// Timestamp actual en segundos unix
pub fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Identificador opaco de la investigación
///
/// El servicio principal puede mandar un entero o un string; se preserva
/// tal cual para la correlación en el payload del callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ResearchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchId::Number(n) => write!(f, "{}", n),
            ResearchId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Request de cálculo ya validado
///
/// Se crea uno por trigger entrante, lo consume el job en background y se
/// descarta: no hay persistencia ni identidad más allá del research_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Identificador de la investigación
    pub research_id: ResearchId,

    /// Lista ordenada de biomarcadores a simular
    pub biomarker_ids: Vec<u64>,
}

/// Estado del job de cálculo
///
/// `Accepted → Running → {Succeeded, Failed}`. Los estados terminales solo
/// son observables por el efecto del callback, nunca por la respuesta 202.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Trigger aceptado, job aún no iniciado
    Accepted,

    /// Cálculo en ejecución (incluye el delay artificial)
    Running,

    /// Cálculo completado exitosamente
    Succeeded,

    /// Fallo simulado del cálculo
    Failed,
}

impl JobStatus {
    /// Verifica si el estado es terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

/// Job de cálculo en background
#[derive(Debug, Clone)]
pub struct CalculationJob {
    /// Request que originó el job
    pub request: CalculationRequest,

    /// Estado actual
    pub status: JobStatus,

    /// Timestamp de aceptación
    pub accepted_at: u64,
}

impl CalculationJob {
    /// Crea un job recién aceptado
    pub fn new(request: CalculationRequest) -> Self {
        Self {
            request,
            status: JobStatus::Accepted,
            accepted_at: unix_timestamp(),
        }
    }

    /// Marca el job como iniciado
    pub fn mark_running(&mut self) {
        self.status = JobStatus::Running;
    }

    /// Marca el job como completado exitosamente
    pub fn mark_succeeded(&mut self) {
        self.status = JobStatus::Succeeded;
    }

    /// Marca el job como fallido
    pub fn mark_failed(&mut self) {
        self.status = JobStatus::Failed;
    }
}

/// Resultado del cálculo en background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Indica si el cálculo fue exitoso
    pub success: bool,

    /// Índice calculado (solo en éxito, rango [0,100], 2 decimales)
    pub ini_result: Option<f64>,

    /// Mensaje de error (solo en fallo)
    pub error_message: Option<String>,

    /// Timestamp de finalización en segundos unix
    pub calculated_at: u64,

    /// Delay artificial aplicado, en segundos (2 decimales)
    pub delay_seconds: f64,
}

impl CalculationResult {
    /// Resultado exitoso con el índice calculado
    pub fn succeeded(ini_result: f64, delay_seconds: f64) -> Self {
        Self {
            success: true,
            ini_result: Some(ini_result),
            error_message: None,
            calculated_at: unix_timestamp(),
            delay_seconds,
        }
    }

    /// Resultado del fallo simulado (descarta el índice)
    pub fn failed(delay_seconds: f64) -> Self {
        Self {
            success: false,
            ini_result: None,
            error_message: Some(CALCULATION_FAILED_MESSAGE.to_string()),
            calculated_at: unix_timestamp(),
            delay_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_id_accepts_number_or_string() {
        let n: ResearchId = serde_json::from_str("42").unwrap();
        assert_eq!(n, ResearchId::Number(42));

        let s: ResearchId = serde_json::from_str("\"abc-7\"").unwrap();
        assert_eq!(s, ResearchId::Text("abc-7".to_string()));
    }

    #[test]
    fn test_research_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ResearchId::Number(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ResearchId::Text("r-1".to_string())).unwrap(),
            "\"r-1\""
        );
    }

    #[test]
    fn test_research_id_display() {
        assert_eq!(ResearchId::Number(7).to_string(), "7");
        assert_eq!(ResearchId::Text("x".to_string()).to_string(), "x");
    }

    #[test]
    fn test_job_status_serialization() {
        let status = JobStatus::Running;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"running\"");
    }

    #[test]
    fn test_job_lifecycle() {
        let request = CalculationRequest {
            research_id: ResearchId::Number(1),
            biomarker_ids: vec![1, 2],
        };
        let mut job = CalculationJob::new(request);

        assert_eq!(job.status, JobStatus::Accepted);
        assert!(!job.status.is_terminal());

        job.mark_running();
        assert_eq!(job.status, JobStatus::Running);
        assert!(!job.status.is_terminal());

        job.mark_succeeded();
        assert_eq!(job.status, JobStatus::Succeeded);
        assert!(job.status.is_terminal());
    }

    #[test]
    fn test_failed_result_carries_fixed_message_and_no_index() {
        let result = CalculationResult::failed(6.25);

        assert!(!result.success);
        assert_eq!(result.ini_result, None);
        assert_eq!(result.error_message.as_deref(), Some(CALCULATION_FAILED_MESSAGE));
        assert_eq!(result.delay_seconds, 6.25);
    }

    #[test]
    fn test_succeeded_result_carries_index_and_no_error() {
        let result = CalculationResult::succeeded(73.42, 5.5);

        assert!(result.success);
        assert_eq!(result.ini_result, Some(73.42));
        assert_eq!(result.error_message, None);
        assert!(result.calculated_at > 0);
    }
}
