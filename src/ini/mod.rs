//! # Dominio del Índice INI
//!
//! Implementa el cálculo simulado del índice INI (0-100):
//!
//! - `biomarkers`: Lectura de biomarcador y tabla de referencia fisiológica
//! - `generator`: Generación de lecturas simuladas de paciente
//! - `estimator`: Normalización por rango, suma ponderada y jitter
//!
//! Toda la aleatoriedad se inyecta vía `rand::Rng` para que los tests
//! sean reproducibles con un generador sembrado.

pub mod biomarkers;
pub mod estimator;
pub mod generator;

pub use biomarkers::{BiomarkerReading, ReferenceBiomarker, REFERENCE_BIOMARKERS};
pub use estimator::calculate_ini_index;
pub use generator::generate_simulated_readings;

/// Redondea a 2 decimales (valores de paciente, índice, delay)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
