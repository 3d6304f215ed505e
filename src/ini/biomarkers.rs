//! # Biomarcadores y Tabla de Referencia
//! src/ini/biomarkers.rs
//!
//! Define la lectura de un biomarcador (valor de paciente + rango de
//! normalidad + peso de significancia) y la tabla fija de referencia
//! fisiológica que usa el generador de datos simulados.

use serde::{Deserialize, Serialize};

/// Lectura de un biomarcador para un paciente
///
/// El valor del paciente es opcional: una lectura sin valor se omite del
/// cálculo del índice (no es un error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerReading {
    /// Identificador del biomarcador solicitado
    pub id: u64,

    /// Nombre para mostrar
    pub name: String,

    /// Valor medido del paciente (None = lectura no informativa)
    pub patient_value: Option<f64>,

    /// Límite inferior del rango de normalidad
    pub min_value: f64,

    /// Límite superior del rango de normalidad
    pub max_value: f64,

    /// Unidad de medida
    pub measure_unit: String,

    /// Peso de significancia (0-1); la tabla de referencia suma ≈1
    pub significance: f64,
}

impl BiomarkerReading {
    /// Ancho del rango de normalidad
    pub fn range_width(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Una lectura con rango cero (min == max) no aporta al score
    pub fn has_zero_range(&self) -> bool {
        self.range_width() == 0.0
    }
}

/// Entrada de la tabla de referencia fisiológica
#[derive(Debug, Clone, Copy)]
pub struct ReferenceBiomarker {
    pub name: &'static str,
    pub min_value: f64,
    pub max_value: f64,
    pub measure_unit: &'static str,
    pub significance: f64,
}

/// Tabla fija de biomarcadores estándar con sus rangos de normalidad
///
/// Los pesos de significancia suman 1.0 por convención de la tabla;
/// el estimador no los normaliza.
pub const REFERENCE_BIOMARKERS: [ReferenceBiomarker; 5] = [
    ReferenceBiomarker {
        name: "Hemoglobin",
        min_value: 120.0,
        max_value: 180.0,
        measure_unit: "g/L",
        significance: 0.25,
    },
    ReferenceBiomarker {
        name: "Albumin",
        min_value: 35.0,
        max_value: 50.0,
        measure_unit: "g/L",
        significance: 0.30,
    },
    ReferenceBiomarker {
        name: "Leukocytes",
        min_value: 4.0,
        max_value: 9.0,
        measure_unit: "x10^9/L",
        significance: 0.15,
    },
    ReferenceBiomarker {
        name: "Lymphocytes",
        min_value: 1.2,
        max_value: 3.5,
        measure_unit: "x10^9/L",
        significance: 0.20,
    },
    ReferenceBiomarker {
        name: "Creatinine",
        min_value: 60.0,
        max_value: 110.0,
        measure_unit: "umol/L",
        significance: 0.10,
    },
];
