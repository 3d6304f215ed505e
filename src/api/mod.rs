//! # Endpoints del Servicio
//!
//! Este módulo contiene los handlers de los tres endpoints:
//!
//! - `calculate_handler`: POST /calculate-ini/ (trigger asíncrono)
//! - `health_handler`: GET /health/ (liveness)
//! - `test_handler`: GET /test/ (capacidades)
//!
//! Los handlers estáticos encajan en el `Router`; el trigger necesita
//! estado (`JobRunner`) y se despacha explícitamente en el servidor.

pub mod handlers;

pub use handlers::{calculate_handler, health_handler, test_handler};
