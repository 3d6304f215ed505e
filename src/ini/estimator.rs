//! # Estimador del Índice INI
//! src/ini/estimator.rs
//!
//! Calcula el índice INI (0-100) a partir de un conjunto de lecturas:
//!
//! 1. Normalización de cada valor respecto a su rango de normalidad
//! 2. Multiplicación por la significancia del biomarcador
//! 3. Suma total y conversión a escala 0-100
//! 4. Jitter uniforme de ±5 puntos, clamp a [0,100] y redondeo a 2 decimales

use rand::Rng;

use crate::ini::biomarkers::BiomarkerReading;
use crate::ini::round2;

/// Calcula el índice INI para un conjunto de lecturas
///
/// Lecturas sin valor de paciente o con rango cero (min == max) se omiten
/// silenciosamente: aportan exactamente 0 al score. Los pesos no se
/// normalizan; la tabla de referencia suma ≈1 por convención.
///
/// # Ejemplo
/// ```
/// use ini_calculator::ini::{calculate_ini_index, BiomarkerReading};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let readings = vec![BiomarkerReading {
///     id: 1,
///     name: "Hemoglobin".to_string(),
///     patient_value: Some(150.0),
///     min_value: 120.0,
///     max_value: 180.0,
///     measure_unit: "g/L".to_string(),
///     significance: 0.25,
/// }];
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let index = calculate_ini_index(&readings, &mut rng);
/// assert!((0.0..=100.0).contains(&index));
/// ```
pub fn calculate_ini_index<R: Rng>(readings: &[BiomarkerReading], rng: &mut R) -> f64 {
    let mut total_score = 0.0;

    for reading in readings {
        let patient_value = match reading.patient_value {
            Some(value) => value,
            None => continue,
        };

        if reading.has_zero_range() {
            continue;
        }

        let normalized = (patient_value - reading.min_value) / reading.range_width();
        let normalized = normalized.clamp(0.0, 1.0);

        total_score += normalized * reading.significance;
    }

    // Conversión a porcentaje (0-100)
    let ini_result = total_score * 100.0;

    // Pequeña variación aleatoria para realismo
    let variation: f64 = rng.gen_range(-5.0..=5.0);
    let ini_result = (ini_result + variation).clamp(0.0, 100.0);

    round2(ini_result)
}
