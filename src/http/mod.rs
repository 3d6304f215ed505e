//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.0 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests HTTP/1.0 (incluyendo body JSON de POST)
//! - Construcción de responses HTTP
//! - Manejo de status codes (202 para el trigger, 400/401 de validación)
//!
//! ### Formato de Request
//!
//! ```text
//! POST /calculate-ini/ HTTP/1.0\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 65\r\n
//! \r\n
//! {"research_id": 42, "biomarker_ids": [1, 2], "secret_key": "..."}
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 202 Accepted\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 120\r\n
//! \r\n
//! {"message": "INI calculation started asynchronously", ...}
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
