//! # Generador de Datos Simulados
//! src/ini/generator.rs
//!
//! Produce una lectura sintética por cada biomarcador solicitado, tomando
//! rango, unidad y peso de la tabla de referencia. En un despliegue real
//! aquí habría una consulta al servicio principal por los datos del
//! paciente.

use rand::Rng;

use crate::ini::biomarkers::{BiomarkerReading, REFERENCE_BIOMARKERS};
use crate::ini::round2;

/// Genera una lectura simulada por cada identificador solicitado
///
/// La tabla de referencia se recorre cíclicamente (módulo su longitud),
/// así que cada identificador recibe una entrada aunque se soliciten más
/// biomarcadores de los que la tabla define (reutilizando rangos).
///
/// El valor del paciente es el punto medio del rango más una desviación
/// uniforme de ±30% del ancho, redondeado a 2 decimales.
pub fn generate_simulated_readings<R: Rng>(biomarker_ids: &[u64], rng: &mut R) -> Vec<BiomarkerReading> {
    let mut readings = Vec::with_capacity(biomarker_ids.len());

    for (i, &biomarker_id) in biomarker_ids.iter().enumerate() {
        let reference = &REFERENCE_BIOMARKERS[i % REFERENCE_BIOMARKERS.len()];

        let range_mid = (reference.min_value + reference.max_value) / 2.0;
        let range_width = reference.max_value - reference.min_value;

        // Desviación aleatoria respecto al centro del rango de normalidad
        let deviation: f64 = rng.gen_range(-0.3..=0.3);
        let patient_value = range_mid + deviation * range_width;

        readings.push(BiomarkerReading {
            id: biomarker_id,
            name: reference.name.to_string(),
            patient_value: Some(round2(patient_value)),
            min_value: reference.min_value,
            max_value: reference.max_value,
            measure_unit: reference.measure_unit.to_string(),
            significance: reference.significance,
        });
    }

    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_one_reading_per_id() {
        let mut rng = StdRng::seed_from_u64(7);
        let readings = generate_simulated_readings(&[1, 2, 3], &mut rng);
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].id, 1);
        assert_eq!(readings[2].id, 3);
    }

    #[test]
    fn test_empty_id_list_produces_no_readings() {
        let mut rng = StdRng::seed_from_u64(7);
        let readings = generate_simulated_readings(&[], &mut rng);
        assert!(readings.is_empty());
    }

    #[test]
    fn test_table_cycles_beyond_five_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids: Vec<u64> = (1..=7).collect();
        let readings = generate_simulated_readings(&ids, &mut rng);

        assert_eq!(readings.len(), 7);
        // La sexta y séptima lectura reutilizan las dos primeras referencias
        assert_eq!(readings[5].name, readings[0].name);
        assert_eq!(readings[6].name, readings[1].name);
        assert_eq!(readings[5].id, 6);
    }

    #[test]
    fn test_patient_values_within_deviation_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let ids: Vec<u64> = (1..=50).collect();

        for reading in generate_simulated_readings(&ids, &mut rng) {
            let mid = (reading.min_value + reading.max_value) / 2.0;
            let width = reading.range_width();
            let value = reading.patient_value.expect("generated reading has value");

            // Tolerancia por el redondeo a 2 decimales
            assert!(value >= mid - 0.3 * width - 0.005, "{} too low: {}", reading.name, value);
            assert!(value <= mid + 0.3 * width + 0.005, "{} too high: {}", reading.name, value);
        }
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        let mut rng = StdRng::seed_from_u64(3);
        for reading in generate_simulated_readings(&[1, 2, 3, 4, 5], &mut rng) {
            let value = reading.patient_value.unwrap();
            assert_eq!(value, (value * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = generate_simulated_readings(&[1, 2, 3], &mut rng_a);
        let b = generate_simulated_readings(&[1, 2, 3], &mut rng_b);

        assert_eq!(a, b);
    }
}
