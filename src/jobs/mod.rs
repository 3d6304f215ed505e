//! # Sistema de Jobs Asíncronos
//!
//! Implementa el trigger fire-and-forget del cálculo INI: el endpoint
//! responde 202 de inmediato y el cálculo corre en un thread detached
//! con delay artificial y fallo simulado.
//!
//! ## Limitaciones de diseño (explícitas)
//!
//! - Sin cola ni límite de jobs concurrentes
//! - Sin consulta de estado, cancelación ni retry
//! - Sin persistencia: un restart abandona los jobs en vuelo

pub mod runner;
pub mod types;

pub use runner::JobRunner;
pub use types::{CalculationJob, CalculationRequest, CalculationResult, JobStatus, ResearchId};
